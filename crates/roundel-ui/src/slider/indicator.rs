//! The teardrop popup that rises above the thumb while a drag is in progress.

use roundel_core::animation::AnimationSpec;
use roundel_core::animator::{Animator, Completed, Target, Transition};
use roundel_core::{
    Color, Content, Layer, LayerId, LayerTree, Path, Rect, ShapeContent, Transform, Vec2,
};
use web_time::Duration;

use super::thumb::value_label;

pub const INDICATOR_SIZE: f32 = 80.0;

/// Lifecycle of the popup. Starts and ends in `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorPhase {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

/// Completion tags the slider routes back into [`IndicatorPresenter::finish`].
/// Each names the popup layer it was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorAnimation {
    Appear(LayerId),
    Disappear(LayerId),
}

pub fn appear_spec() -> AnimationSpec {
    AnimationSpec::spring(Duration::from_millis(500), 0.6, 0.8)
}

pub fn disappear_spec() -> AnimationSpec {
    AnimationSpec::spring(Duration::from_millis(200), 0.9, 0.8)
}

/// Popup frame for a thumb at `thumb` (widget coordinates): centered over
/// it, with the tip on the thumb's center.
pub fn indicator_rect(thumb: Rect) -> Rect {
    Rect::new(
        thumb.mid_x() - INDICATOR_SIZE / 2.0,
        thumb.mid_y() - INDICATOR_SIZE,
        INDICATOR_SIZE,
        INDICATOR_SIZE,
    )
}

/// Shrunk and dropped onto the thumb: where the popup grows from and
/// collapses to.
fn collapsed(scale: f32) -> Transform {
    Transform::scale(scale, scale).then(&Transform::translate(0.0, INDICATOR_SIZE / 2.0))
}

#[derive(Clone, Copy, Debug)]
struct Popup {
    layer: LayerId,
    label: LayerId,
}

#[derive(Debug, Default)]
pub struct IndicatorPresenter {
    popup: Option<Popup>,
    phase: IndicatorPhase,
}

impl IndicatorPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IndicatorPhase {
        self.phase
    }

    pub fn popup(&self) -> Option<LayerId> {
        self.popup.map(|p| p.layer)
    }

    pub fn popup_label(&self) -> Option<LayerId> {
        self.popup.map(|p| p.label)
    }

    /// Text the popup currently shows.
    pub fn text<'a>(&self, tree: &'a LayerTree) -> Option<&'a str> {
        self.popup
            .and_then(|p| tree.get(p.label))
            .and_then(|l| l.text())
    }

    /// Builds a fresh popup behind everything else and springs it open while
    /// the thumb label shrinks away. Any previous popup is dropped first.
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        tree: &mut LayerTree,
        animator: &mut Animator<IndicatorAnimation>,
        thumb_label: Option<LayerId>,
        thumb: Rect,
        value: i32,
        fill: Color,
        text_color: Color,
    ) {
        if self.popup.is_some() {
            self.hide(tree, animator, thumb_label);
        }

        let mut popup = Layer::new(indicator_rect(thumb)).content(Content::Shape(ShapeContent {
            path: Path::teardrop(INDICATOR_SIZE),
            fill,
        }));
        popup.transform = collapsed(0.2);
        let layer = tree.insert_at_root(0, popup);

        let mut label = value_label(value.to_string(), fill, text_color);
        label.set_center(Vec2::new(INDICATOR_SIZE / 2.0, INDICATOR_SIZE / 4.0));
        let label = match tree.add_child(layer, label) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("popup label not attached: {err}");
                tree.remove(layer);
                return;
            }
        };
        self.popup = Some(Popup { layer, label });

        let mut transition = Transition::new(appear_spec())
            .animate(layer, Target::Transform(Transform::identity()));
        if let Some(thumb_label) = thumb_label {
            transition = transition
                .animate(thumb_label, Target::Transform(Transform::scale(0.1, 0.1)))
                .animate(thumb_label, Target::Alpha(0.0));
        }
        animator.submit(tree, transition.on_complete(IndicatorAnimation::Appear(layer)));
        self.phase = IndicatorPhase::Appearing;
        log::debug!("indicator appearing with {value}");
    }

    /// Moves the popup over `thumb` and refreshes its text. Runs while an
    /// appear or disappear animation is in flight too; transforms are left
    /// to the animator.
    pub fn update(&self, tree: &mut LayerTree, thumb: Rect, value: i32) {
        let Some(popup) = self.popup else {
            return;
        };
        if let Some(layer) = tree.get_mut(popup.layer) {
            layer.frame = indicator_rect(thumb);
        }
        if let Some(label) = tree.get_mut(popup.label) {
            label.set_text(value.to_string());
        }
        log::trace!("indicator at {:?} showing {value}", indicator_rect(thumb));
    }

    /// Springs the popup closed and brings the thumb label back. Returns
    /// false when there was no popup to withdraw.
    pub fn hide_animated(
        &mut self,
        tree: &LayerTree,
        animator: &mut Animator<IndicatorAnimation>,
        thumb_label: Option<LayerId>,
    ) -> bool {
        let Some(popup) = self.popup else {
            self.phase = IndicatorPhase::Hidden;
            return false;
        };
        let mut transition = Transition::new(disappear_spec())
            .animate(popup.layer, Target::Transform(collapsed(0.01)))
            .animate(popup.label, Target::Alpha(0.0));
        if let Some(thumb_label) = thumb_label {
            transition = transition
                .animate(thumb_label, Target::Transform(Transform::identity()))
                .animate(thumb_label, Target::Alpha(1.0));
        }
        animator.submit(
            tree,
            transition.on_complete(IndicatorAnimation::Disappear(popup.layer)),
        );
        self.phase = IndicatorPhase::Disappearing;
        log::debug!("indicator disappearing");
        true
    }

    /// Drops the popup at once, cancelling anything animating it or the
    /// thumb label. The caller restores the thumb label.
    pub fn hide(
        &mut self,
        tree: &mut LayerTree,
        animator: &mut Animator<IndicatorAnimation>,
        thumb_label: Option<LayerId>,
    ) {
        if let Some(thumb_label) = thumb_label {
            animator.cancel(thumb_label, None);
        }
        if let Some(popup) = self.popup.take() {
            animator.cancel(popup.label, None);
            animator.cancel(popup.layer, None);
            tree.remove(popup.layer);
        }
        if self.phase != IndicatorPhase::Hidden {
            log::debug!("indicator hidden");
        }
        self.phase = IndicatorPhase::Hidden;
    }

    /// Applies a finished or interrupted animation. Only ever detaches the
    /// popup the tag names. Returns true when the thumb should be re-synced.
    pub fn finish(
        &mut self,
        tree: &mut LayerTree,
        completed: &Completed<IndicatorAnimation>,
    ) -> bool {
        match completed.tag {
            Some(IndicatorAnimation::Appear(layer)) => {
                let current = self.popup.is_some_and(|p| p.layer == layer);
                if current && completed.finished && self.phase == IndicatorPhase::Appearing {
                    self.phase = IndicatorPhase::Visible;
                    log::debug!("indicator visible");
                }
                false
            }
            Some(IndicatorAnimation::Disappear(layer)) => {
                tree.remove(layer);
                if self.popup.is_some_and(|p| p.layer == layer) {
                    self.popup = None;
                    self.phase = IndicatorPhase::Hidden;
                    log::debug!("indicator hidden");
                }
                true
            }
            None => false,
        }
    }

    pub fn set_fill(&self, tree: &mut LayerTree, fill: Color) {
        let Some(popup) = self.popup else {
            return;
        };
        if let Some(Content::Shape(shape)) = tree.get_mut(popup.layer).map(|l| &mut l.content) {
            shape.fill = fill;
        }
        if let Some(label) = tree.get_mut(popup.label) {
            label.background = fill;
        }
    }

    pub fn set_text_color(&self, tree: &mut LayerTree, color: Color) {
        if let Some(text) = self
            .popup
            .and_then(|p| tree.get_mut(p.label))
            .and_then(|l| l.text_mut())
        {
            text.color = color;
        }
    }
}
