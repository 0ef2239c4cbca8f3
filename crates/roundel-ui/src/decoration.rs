use roundel_core::{Color, Layer};

/// Border and corner styling shared by every decorated control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoration {
    pub border_width: f32,
    pub border_color: Color,
    pub corner_radius: f32,
    pub masks_to_bounds: bool,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: Color::LIGHT_GRAY,
            corner_radius: 0.0,
            masks_to_bounds: false,
        }
    }
}

impl Decoration {
    /// 2pt light gray border, 4pt corners, clipped.
    pub fn rounded() -> Self {
        Self {
            border_width: 2.0,
            border_color: Color::LIGHT_GRAY,
            corner_radius: 4.0,
            masks_to_bounds: true,
        }
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn masks_to_bounds(mut self, masks: bool) -> Self {
        self.masks_to_bounds = masks;
        self
    }

    pub fn apply(&self, layer: &mut Layer) {
        layer.border_width = self.border_width;
        layer.border_color = self.border_color;
        layer.corner_radius = self.corner_radius;
        layer.masks_to_bounds = self.masks_to_bounds;
    }
}
