//! # Layers, input, and animation
//!
//! Roundel controls are retained objects. Each one owns a [`LayerTree`]
//! describing what it looks like right now, reacts to [`PointerEvent`]s
//! delivered in its local coordinates, and hands declarative transitions to
//! an [`Animator`](animator::Animator) that the host ticks once per frame.
//!
//! ## Layers
//!
//! ```rust
//! use roundel_core::*;
//!
//! let mut tree = LayerTree::new(Layer::new(Rect::new(0.0, 0.0, 100.0, 40.0)));
//! let label = tree.push(Layer::new(Rect::new(0.0, 0.0, 40.0, 40.0)).background(Color::BLUE));
//! tree.get_mut(label).unwrap().set_center(Vec2::new(50.0, 20.0));
//! assert_eq!(tree.get(label).unwrap().frame.x, 30.0);
//! ```
//!
//! ## Transitions
//!
//! ```rust
//! use std::sync::Arc;
//! use roundel_core::*;
//! use roundel_core::animation::{AnimationSpec, Easing, TestClock};
//! use roundel_core::animator::{Animator, Target, Transition};
//! use web_time::Duration;
//!
//! let clock = TestClock::new();
//! let mut animator: Animator<&'static str> = Animator::new(Arc::new(clock.clone()));
//! let mut tree = LayerTree::new(Layer::default());
//! let dot = tree.push(Layer::default());
//!
//! animator.submit(
//!     &tree,
//!     Transition::new(AnimationSpec::tween(Duration::from_millis(100), Easing::Linear))
//!         .animate(dot, Target::Alpha(0.0))
//!         .on_complete("faded"),
//! );
//! clock.advance(Duration::from_millis(100));
//! let done = animator.tick(&mut tree);
//! assert_eq!(done[0].tag, Some("faded"));
//! assert_eq!(tree.get(dot).unwrap().alpha, 0.0);
//! ```
//!
//! Completion tags are how controls learn that an animation ended; cleanup
//! keyed on them should be idempotent, since a newer transition may have
//! interrupted the one that is reporting.

pub mod animation;
pub mod animator;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layer;
pub mod path;
pub mod semantics;
pub mod tests;

pub use color::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use input::*;
pub use layer::*;
pub use path::*;
pub use semantics::*;
