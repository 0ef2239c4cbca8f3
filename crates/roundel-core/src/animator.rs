//! Declarative layer transitions driven by a frame clock.
//!
//! A [`Transition`] describes target values for layer properties plus an
//! optional completion tag. [`Animator::submit`] starts it from the layers'
//! current values; [`Animator::tick`] writes interpolated values into the
//! tree and hands back the tags of transitions that ended. Submitting a new
//! track for a `(layer, property)` pair that is already animating takes it
//! over; a transition left without tracks ends with `finished == false`.

use std::sync::Arc;

use smallvec::SmallVec;
use web_time::Instant;

use crate::animation::{AnimatedValue, AnimationSpec, Clock, SystemClock};
use crate::{Color, LayerId, LayerTree, Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Transform,
    Alpha,
    Background,
    BorderColor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    Transform(Transform),
    Alpha(f32),
    Background(Color),
    BorderColor(Color),
}

impl Target {
    pub fn property(&self) -> Property {
        match self {
            Target::Transform(_) => Property::Transform,
            Target::Alpha(_) => Property::Alpha,
            Target::Background(_) => Property::Background,
            Target::BorderColor(_) => Property::BorderColor,
        }
    }
}

pub struct Transition<C> {
    spec: AnimationSpec,
    changes: SmallVec<[(LayerId, Target); 4]>,
    completion: Option<C>,
}

impl<C> Transition<C> {
    pub fn new(spec: AnimationSpec) -> Self {
        Self {
            spec,
            changes: SmallVec::new(),
            completion: None,
        }
    }

    pub fn animate(mut self, layer: LayerId, target: Target) -> Self {
        self.changes.push((layer, target));
        self
    }

    /// Tag reported by [`Animator::tick`] once this transition ends.
    pub fn on_complete(mut self, tag: C) -> Self {
        self.completion = Some(tag);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// A transition that ended. `finished` is false when it was interrupted.
#[derive(Clone, Debug, PartialEq)]
pub struct Completed<C> {
    pub id: TransitionId,
    pub tag: Option<C>,
    pub finished: bool,
}

enum TrackValue {
    Transform(AnimatedValue<Transform>),
    Alpha(AnimatedValue<f32>),
    Color(Property, AnimatedValue<Color>),
}

struct Track {
    layer: LayerId,
    property: Property,
    value: TrackValue,
}

impl Track {
    fn start(
        tree: &LayerTree,
        layer: LayerId,
        target: Target,
        spec: AnimationSpec,
        now: Instant,
    ) -> Option<Self> {
        let current = tree.get(layer)?;
        let property = target.property();
        let value = match target {
            Target::Transform(to) => {
                let mut v = AnimatedValue::new(current.transform, spec);
                v.set_target(to, now);
                TrackValue::Transform(v)
            }
            Target::Alpha(to) => {
                let mut v = AnimatedValue::new(current.alpha, spec);
                v.set_target(to, now);
                TrackValue::Alpha(v)
            }
            Target::Background(to) => {
                let mut v = AnimatedValue::new(current.background, spec);
                v.set_target(to, now);
                TrackValue::Color(property, v)
            }
            Target::BorderColor(to) => {
                let mut v = AnimatedValue::new(current.border_color, spec);
                v.set_target(to, now);
                TrackValue::Color(property, v)
            }
        };
        Some(Self {
            layer,
            property,
            value,
        })
    }

    /// Writes the sampled value; `None` when the layer is gone.
    fn step(&mut self, tree: &mut LayerTree, now: Instant) -> Option<bool> {
        let layer = tree.get_mut(self.layer)?;
        let running = match &mut self.value {
            TrackValue::Transform(v) => {
                let r = v.update(now);
                layer.transform = *v.get();
                r
            }
            TrackValue::Alpha(v) => {
                let r = v.update(now);
                layer.alpha = *v.get();
                r
            }
            TrackValue::Color(Property::BorderColor, v) => {
                let r = v.update(now);
                layer.border_color = *v.get();
                r
            }
            TrackValue::Color(_, v) => {
                let r = v.update(now);
                layer.background = *v.get();
                r
            }
        };
        Some(running)
    }
}

struct Running<C> {
    id: TransitionId,
    tracks: Vec<Track>,
    completion: Option<C>,
    interrupted: bool,
}

pub struct Animator<C> {
    clock: Arc<dyn Clock>,
    running: Vec<Running<C>>,
    ended: Vec<Completed<C>>,
    next_id: u64,
}

impl<C> Default for Animator<C> {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl<C> Animator<C> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            running: Vec::new(),
            ended: Vec::new(),
            next_id: 1,
        }
    }

    /// True when nothing is running and no completion is pending.
    pub fn is_idle(&self) -> bool {
        self.running.is_empty() && self.ended.is_empty()
    }

    pub fn is_animating(&self, layer: LayerId, property: Property) -> bool {
        self.running.iter().any(|r| {
            r.tracks
                .iter()
                .any(|t| t.layer == layer && t.property == property)
        })
    }

    /// Starts `transition` from the current values in `tree`.
    pub fn submit(&mut self, tree: &LayerTree, transition: Transition<C>) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        let now = self.clock.now();

        let mut tracks = Vec::with_capacity(transition.changes.len());
        for (layer, target) in transition.changes {
            self.cancel(layer, Some(target.property()));
            match Track::start(tree, layer, target, transition.spec, now) {
                Some(track) => tracks.push(track),
                None => log::warn!("animating detached layer {layer:?}; track dropped"),
            }
        }

        self.running.push(Running {
            id,
            tracks,
            completion: transition.completion,
            interrupted: false,
        });
        id
    }

    /// Drops running tracks for `layer` (all properties when `None`).
    /// Transitions left empty end as interrupted on the next tick.
    pub fn cancel(&mut self, layer: LayerId, property: Option<Property>) {
        for r in &mut self.running {
            let before = r.tracks.len();
            r.tracks
                .retain(|t| !(t.layer == layer && property.is_none_or(|p| p == t.property)));
            if r.tracks.len() != before && r.tracks.is_empty() {
                r.interrupted = true;
            }
        }
        self.reap();
    }

    fn reap(&mut self) {
        let mut i = 0;
        while i < self.running.len() {
            if self.running[i].interrupted && self.running[i].tracks.is_empty() {
                let r = self.running.remove(i);
                self.ended.push(Completed {
                    id: r.id,
                    tag: r.completion,
                    finished: false,
                });
            } else {
                i += 1;
            }
        }
    }

    /// Advances every running transition, writing into `tree`, and returns
    /// the transitions that ended since the last tick in the order they ended.
    pub fn tick(&mut self, tree: &mut LayerTree) -> Vec<Completed<C>> {
        let now = self.clock.now();
        let mut out = std::mem::take(&mut self.ended);

        let mut i = 0;
        while i < self.running.len() {
            let r = &mut self.running[i];
            let mut any_running = false;
            let mut lost_layer = false;
            r.tracks.retain_mut(|t| match t.step(tree, now) {
                Some(running) => {
                    any_running |= running;
                    true
                }
                None => {
                    lost_layer = true;
                    false
                }
            });

            if any_running {
                i += 1;
                continue;
            }
            let r = self.running.remove(i);
            out.push(Completed {
                id: r.id,
                tag: r.completion,
                finished: !(lost_layer && r.tracks.is_empty()),
            });
        }
        out
    }
}
