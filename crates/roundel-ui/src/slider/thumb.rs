//! Thumb geometry and the value label that stands in for the thumb.

use roundel_core::{
    Color, Content, Layer, LayerId, LayerTree, Rect, TextAlign, TextContent, Transform,
};

pub const THUMB_SIZE: f32 = 40.0;
pub const THUMB_FONT_SIZE: f32 = 20.0;
/// Headroom the track strip keeps above the thumb.
pub const THUMB_LABEL_OFFSET: f32 = 10.0;
pub const TRACK_LINE_HEIGHT: f32 = 2.0;

/// The drawn track: a thin line through the vertical middle of `bounds`.
pub fn track_rect(bounds: Rect) -> Rect {
    Rect::new(
        bounds.x,
        bounds.mid_y() - TRACK_LINE_HEIGHT / 2.0,
        bounds.w,
        TRACK_LINE_HEIGHT,
    )
}

/// Where the thumb sits for `ratio` (0 at minimum, 1 at maximum). The thumb
/// never overhangs the track ends.
pub fn thumb_rect(bounds: Rect, track: Rect, ratio: f32) -> Rect {
    let travel = (track.w - THUMB_SIZE).max(0.0);
    Rect::new(
        track.x + ratio.clamp(0.0, 1.0) * travel,
        bounds.mid_y() - THUMB_SIZE / 2.0,
        THUMB_SIZE,
        THUMB_SIZE,
    )
}

/// Inverse of [`thumb_rect`]: the ratio that centers the thumb on `x`.
pub fn ratio_for_x(track: Rect, x: f32) -> f32 {
    let travel = track.w - THUMB_SIZE;
    if travel <= 0.0 {
        return 0.0;
    }
    ((x - track.x - THUMB_SIZE / 2.0) / travel).clamp(0.0, 1.0)
}

/// A round, centered value label in the thumb's colors.
pub fn value_label(text: impl Into<String>, fill: Color, text_color: Color) -> Layer {
    Layer::new(Rect::new(0.0, 0.0, THUMB_SIZE, THUMB_SIZE))
        .background(fill)
        .corner_radius(THUMB_SIZE / 2.0)
        .masks_to_bounds(true)
        .content(Content::Text(TextContent {
            text: text.into(),
            color: text_color,
            font_size: THUMB_FONT_SIZE,
            align: TextAlign::Center,
        }))
}

/// Keeps the thumb label in step with the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThumbPresenter {
    label: Option<LayerId>,
}

impl ThumbPresenter {
    pub fn new(label: LayerId) -> Self {
        Self { label: Some(label) }
    }

    pub fn label(&self) -> Option<LayerId> {
        self.label
    }

    /// Centers the label on `thumb` (widget coordinates) and sets its text.
    /// A missing label is skipped.
    pub fn update(&self, tree: &mut LayerTree, thumb: Rect, value: i32) {
        let Some(layer) = self.label.and_then(|id| tree.get_mut(id)) else {
            return;
        };
        layer.set_text(value.to_string());
        layer.set_center(thumb.center());
        log::trace!("thumb label {value} at {:?}", layer.frame);
    }

    /// Back to full size and opacity.
    pub fn restore(&self, tree: &mut LayerTree) {
        if let Some(layer) = self.label.and_then(|id| tree.get_mut(id)) {
            layer.transform = Transform::identity();
            layer.alpha = 1.0;
        }
    }

    pub fn set_colors(&self, tree: &mut LayerTree, fill: Color, text_color: Color) {
        let Some(layer) = self.label.and_then(|id| tree.get_mut(id)) else {
            return;
        };
        layer.background = fill;
        if let Some(text) = layer.text_mut() {
            text.color = text_color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_travels_inside_the_track() {
        let bounds = Rect::new(0.0, 50.0, 300.0, 50.0);
        let track = track_rect(bounds);
        assert_eq!(track, Rect::new(0.0, 74.0, 300.0, 2.0));

        assert_eq!(thumb_rect(bounds, track, 0.0).x, 0.0);
        assert_eq!(thumb_rect(bounds, track, 1.0).max_x(), 300.0);
        assert_eq!(thumb_rect(bounds, track, 0.5).mid_x(), 150.0);
        assert_eq!(thumb_rect(bounds, track, 0.5).mid_y(), 75.0);
    }

    #[test]
    fn ratio_for_x_inverts_thumb_rect() {
        let bounds = Rect::new(0.0, 0.0, 300.0, 50.0);
        let track = track_rect(bounds);
        for ratio in [0.0, 0.25, 0.5, 1.0] {
            let x = thumb_rect(bounds, track, ratio).mid_x();
            assert!((ratio_for_x(track, x) - ratio).abs() < 1e-6);
        }
        assert_eq!(ratio_for_x(track, -100.0), 0.0);
        assert_eq!(ratio_for_x(track, 1000.0), 1.0);
    }

    #[test]
    fn update_without_label_is_a_no_op() {
        let mut tree = LayerTree::new(Layer::default());
        ThumbPresenter::default().update(&mut tree, Rect::ZERO, 3);
        assert_eq!(tree.len(), 1);
    }
}
