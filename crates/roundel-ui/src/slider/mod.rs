//! `BetterSlider`: an integer slider whose thumb is a value label, with a
//! teardrop popup that rises above the thumb while it is dragged.
//!
//! The widget owns three collaborators and keeps them in step:
//!
//! - [`ValueModel`]: the range and the continuous drag position.
//! - [`ThumbPresenter`]: the round label that replaces the thumb graphic.
//! - [`IndicatorPresenter`]: the popup and its appear/disappear springs.
//!
//! Pointer input goes through a [`ControlTracker`], which turns it into
//! [`ControlEvents`]; [`BetterSlider::send_actions`] routes those to the
//! presenters. Animations run on an [`Animator`] ticked from
//! [`Widget::tick`].
//!
//! ```rust
//! use std::sync::Arc;
//! use roundel_core::animation::TestClock;
//! use roundel_core::{PointerEvent, Vec2};
//! use roundel_ui::{BetterSlider, Widget};
//!
//! let clock = TestClock::new();
//! let mut slider = BetterSlider::with_clock(Arc::new(clock.clone()));
//! slider.set_range(0, 100);
//! slider.set_value(250);
//! assert_eq!(slider.value(), 100);
//!
//! slider.handle_pointer(&PointerEvent::touch_down(Vec2::new(280.0, 75.0)));
//! assert!(slider.popup_text().is_some());
//! ```

mod indicator;
mod thumb;
mod value;

use std::rc::Rc;
use std::sync::Arc;

use roundel_core::animation::{Clock, SystemClock};
use roundel_core::animator::Animator;
use roundel_core::{
    Color, ControlEvents, Layer, LayerId, LayerTree, PointerEvent, Rect, Role, Semantics, Size,
    Vec2,
};

pub use indicator::{
    INDICATOR_SIZE, IndicatorAnimation, IndicatorPhase, IndicatorPresenter, appear_spec,
    disappear_spec, indicator_rect,
};
pub use thumb::{
    THUMB_FONT_SIZE, THUMB_LABEL_OFFSET, THUMB_SIZE, TRACK_LINE_HEIGHT, ThumbPresenter,
    ratio_for_x, thumb_rect, track_rect, value_label,
};
pub use value::{SliderRange, ValueModel};

use crate::gestures::ControlTracker;
use crate::layout::{self, Anchors};
use crate::widget::Widget;

/// Height of the touch strip holding the track, pinned to the bottom edge.
pub const TRACK_HEIGHT: f32 = THUMB_SIZE + THUMB_LABEL_OFFSET;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderAppearance {
    pub track_color: Color,
    pub thumb_color: Color,
    pub value_color: Color,
}

impl Default for SliderAppearance {
    fn default() -> Self {
        Self {
            track_color: Color::LIGHT_GRAY,
            thumb_color: Color::BLUE,
            value_color: Color::WHITE,
        }
    }
}

/// Everything a host can preset on a slider.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    pub range: SliderRange,
    pub value: i32,
    pub appearance: SliderAppearance,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            range: SliderRange::default(),
            value: 1,
            appearance: SliderAppearance::default(),
        }
    }
}

pub struct BetterSlider {
    tree: LayerTree,
    track: LayerId,
    track_line: LayerId,
    thumb: ThumbPresenter,
    indicator: IndicatorPresenter,
    model: ValueModel,
    appearance: SliderAppearance,
    tracker: ControlTracker,
    animator: Animator<IndicatorAnimation>,
    on_value_changed: Option<Rc<dyn Fn(i32)>>,
    grab_offset: f32,
}

impl Default for BetterSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl BetterSlider {
    /// Range 1..=10 at 1, laid out at its intrinsic size.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Animations read time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_config(SliderConfig::default(), clock)
    }

    pub fn from_config(config: SliderConfig, clock: Arc<dyn Clock>) -> Self {
        let size = Self::INTRINSIC_SIZE;
        let appearance = config.appearance;
        let model = ValueModel::new(config.range, config.value);

        let mut tree = LayerTree::new(Layer::new(Rect::from_size(size)));
        let track = tree.push(Layer::new(Self::track_frame(size)));
        let track_line = Layer::new(Rect::ZERO)
            .background(appearance.track_color)
            .corner_radius(TRACK_LINE_HEIGHT / 2.0);
        let track_line = match tree.add_child(track, track_line) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("track line not attached: {err}");
                tree.push(Layer::default())
            }
        };
        let label = tree.push(value_label(
            model.value().to_string(),
            appearance.thumb_color,
            appearance.value_color,
        ));

        let mut slider = Self {
            tree,
            track,
            track_line,
            thumb: ThumbPresenter::new(label),
            indicator: IndicatorPresenter::new(),
            model,
            appearance,
            tracker: ControlTracker::new(),
            animator: Animator::new(clock),
            on_value_changed: None,
            grab_offset: 0.0,
        };
        slider.layout(size);
        slider
    }

    pub const INTRINSIC_SIZE: Size = Size {
        width: 300.0,
        height: 100.0,
    };

    fn track_frame(size: Size) -> Rect {
        layout::resolve(size, Anchors::bottom_strip(TRACK_HEIGHT)).unwrap_or_else(|err| {
            log::warn!("track layout failed, pinning manually: {err}");
            Rect::new(0.0, size.height - TRACK_HEIGHT, size.width, TRACK_HEIGHT)
        })
    }

    // --- value and range ---

    pub fn value(&self) -> i32 {
        self.model.value()
    }

    /// Clamps into the range, then moves the thumb (and the popup while a
    /// drag is in progress). Never notifies the observer.
    pub fn set_value(&mut self, value: i32) {
        self.model.set_value(value);
        self.refresh();
    }

    pub fn minimum(&self) -> i32 {
        self.model.range().minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.model.range().maximum()
    }

    pub fn range(&self) -> SliderRange {
        self.model.range()
    }

    pub fn set_minimum(&mut self, minimum: i32) {
        self.model.set_minimum(minimum);
        self.refresh();
    }

    pub fn set_maximum(&mut self, maximum: i32) {
        self.model.set_maximum(maximum);
        self.refresh();
    }

    pub fn set_range(&mut self, minimum: i32, maximum: i32) {
        self.model.set_range(SliderRange::new(minimum, maximum));
        self.refresh();
    }

    // --- appearance ---

    pub fn appearance(&self) -> SliderAppearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: SliderAppearance) {
        self.set_track_color(appearance.track_color);
        self.set_thumb_color(appearance.thumb_color);
        self.set_value_color(appearance.value_color);
    }

    pub fn set_track_color(&mut self, color: Color) {
        self.appearance.track_color = color;
        if let Some(line) = self.tree.get_mut(self.track_line) {
            line.background = color;
        }
    }

    /// Fill of the thumb label and the popup.
    pub fn set_thumb_color(&mut self, color: Color) {
        self.appearance.thumb_color = color;
        self.thumb
            .set_colors(&mut self.tree, color, self.appearance.value_color);
        self.indicator.set_fill(&mut self.tree, color);
    }

    /// Text color of the thumb label and the popup label.
    pub fn set_value_color(&mut self, color: Color) {
        self.appearance.value_color = color;
        self.thumb
            .set_colors(&mut self.tree, self.appearance.thumb_color, color);
        self.indicator.set_text_color(&mut self.tree, color);
    }

    // --- observer ---

    pub fn set_on_value_changed(&mut self, f: impl Fn(i32) + 'static) {
        self.on_value_changed = Some(Rc::new(f));
    }

    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    // --- inspection ---

    pub fn indicator_phase(&self) -> IndicatorPhase {
        self.indicator.phase()
    }

    pub fn thumb_label(&self) -> Option<LayerId> {
        self.thumb.label()
    }

    pub fn thumb_text(&self) -> Option<&str> {
        self.thumb
            .label()
            .and_then(|id| self.tree.get(id))
            .and_then(|l| l.text())
    }

    pub fn popup(&self) -> Option<LayerId> {
        self.indicator.popup()
    }

    pub fn popup_text(&self) -> Option<&str> {
        self.indicator.text(&self.tree)
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    /// The track strip in widget coordinates; touches start here.
    pub fn track_bounds(&self) -> Rect {
        self.tree
            .get(self.track)
            .map(|l| l.frame)
            .unwrap_or(Rect::ZERO)
    }

    /// Thumb rect in widget coordinates, derived from the track's current
    /// frame and the position.
    pub fn thumb_rect(&self) -> Rect {
        let track = self.track_bounds();
        let local = Rect::from_size(track.size());
        thumb_rect(local, track_rect(local), self.model.ratio()).offset(track.x, track.y)
    }

    // --- event routing ---

    /// Routes control events to the presenters, in this order: show the
    /// popup, refresh it (and notify), move the thumb, withdraw the popup.
    pub fn send_actions(&mut self, events: ControlEvents) {
        if events.contains(ControlEvents::TOUCH_DOWN) {
            self.show_indicator();
        }
        if events.intersects(ControlEvents::TOUCH_DRAG_INSIDE | ControlEvents::VALUE_CHANGED) {
            self.update_indicator(events.contains(ControlEvents::VALUE_CHANGED));
        }
        if events.intersects(
            ControlEvents::TOUCH_DRAG_INSIDE
                | ControlEvents::TOUCH_DRAG_OUTSIDE
                | ControlEvents::TOUCH_DRAG_ENTER
                | ControlEvents::TOUCH_DRAG_EXIT,
        ) {
            self.update_thumb();
        }
        if events.contains(ControlEvents::TOUCH_UP_INSIDE) {
            self.hide_indicator_animated();
        }
        if events.intersects(ControlEvents::ABNORMAL_END) {
            self.hide_indicator();
        }
    }

    /// Snaps the thumb label to the current value. Direct, never animated.
    pub fn update_thumb(&mut self) {
        let thumb = self.thumb_rect();
        self.thumb.update(&mut self.tree, thumb, self.model.value());
    }

    fn refresh(&mut self) {
        self.update_thumb();
        if self.tracker.is_tracking() {
            let thumb = self.thumb_rect();
            self.indicator.update(&mut self.tree, thumb, self.model.value());
        }
    }

    fn show_indicator(&mut self) {
        let thumb = self.thumb_rect();
        self.indicator.show(
            &mut self.tree,
            &mut self.animator,
            self.thumb.label(),
            thumb,
            self.model.value(),
            self.appearance.thumb_color,
            self.appearance.value_color,
        );
    }

    fn update_indicator(&mut self, notify: bool) {
        let thumb = self.thumb_rect();
        let value = self.model.value();
        self.indicator.update(&mut self.tree, thumb, value);
        if notify && let Some(f) = self.on_value_changed.clone() {
            f(value);
        }
    }

    fn hide_indicator_animated(&mut self) {
        let animated =
            self.indicator
                .hide_animated(&self.tree, &mut self.animator, self.thumb.label());
        if !animated {
            self.thumb.restore(&mut self.tree);
            self.update_thumb();
        }
    }

    fn hide_indicator(&mut self) {
        self.indicator
            .hide(&mut self.tree, &mut self.animator, self.thumb.label());
        self.thumb.restore(&mut self.tree);
        self.update_thumb();
    }

    /// Moves the position under the finger. Returns whether it changed.
    fn drag_to(&mut self, local: Vec2) -> bool {
        let local_bounds = Rect::from_size(self.track_bounds().size());
        let ratio = ratio_for_x(track_rect(local_bounds), local.x - self.grab_offset);
        self.model.set_ratio(ratio)
    }
}

impl Widget for BetterSlider {
    fn layers(&self) -> &LayerTree {
        &self.tree
    }

    fn layout(&mut self, size: Size) {
        {
            let root = self.tree.root_layer_mut();
            root.frame.w = size.width;
            root.frame.h = size.height;
        }
        let frame = Self::track_frame(size);
        if let Some(track) = self.tree.get_mut(self.track) {
            track.frame = frame;
        }
        if let Some(line) = self.tree.get_mut(self.track_line) {
            line.frame = track_rect(Rect::from_size(frame.size()));
        }
        self.refresh();
    }

    fn intrinsic_size(&self) -> Size {
        Self::INTRINSIC_SIZE
    }

    fn semantics(&self) -> Semantics {
        Semantics::new(Role::Slider).value(self.model.value().to_string())
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        let bounds = self.track_bounds();
        let mut events = self.tracker.handle(event, bounds);
        let local = Vec2::new(event.position.x - bounds.x, event.position.y - bounds.y);

        if events.contains(ControlEvents::TOUCH_DOWN) {
            let thumb = self.thumb_rect();
            self.grab_offset = if thumb.contains(event.position) {
                event.position.x - thumb.mid_x()
            } else {
                0.0
            };
        } else if events.contains(ControlEvents::TOUCH_DRAG_INSIDE) && self.drag_to(local) {
            events |= ControlEvents::VALUE_CHANGED;
        }

        if !events.is_empty() {
            log::trace!("slider events {events:?} at {:?}", event.position);
            self.send_actions(events);
        }
        events
    }

    fn tick(&mut self) {
        for completed in self.animator.tick(&mut self.tree) {
            if self.indicator.finish(&mut self.tree, &completed) {
                self.update_thumb();
            }
        }
    }
}
