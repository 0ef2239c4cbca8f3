use roundel_core::{
    Color, Content, ContentMode, ImageContent, Layer, LayerId, LayerTree, Rect, Role, Semantics,
    Size,
};

use crate::decoration::Decoration;
use crate::widget::{Control, Widget};

pub const DEFAULT_SIDE: f32 = 150.0;

/// Scales `image` to cover `bounds` without distortion, centered; the
/// overflow is what clipping cuts off.
pub fn aspect_fill_rect(image: Size, bounds: Rect) -> Rect {
    if image.width <= 0.0 || image.height <= 0.0 {
        return bounds;
    }
    let scale = (bounds.w / image.width).max(bounds.h / image.height);
    Rect::from_center(bounds.center(), image.width * scale, image.height * scale)
}

/// A circular image: square frame, corner radius of half the side, thin
/// light gray rim.
pub struct RoundImageView {
    control: Control,
    image: LayerId,
}

impl Default for RoundImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundImageView {
    pub fn new() -> Self {
        let decoration = Decoration::default()
            .border(1.0, Color::LIGHT_GRAY)
            .masks_to_bounds(true);
        let mut control = Control::new(Size::ZERO, decoration);
        let image = control.tree_mut().push(Layer::default());
        let mut view = Self { control, image };
        view.layout(Size::new(DEFAULT_SIDE, DEFAULT_SIDE));
        view
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    pub fn side(&self) -> f32 {
        self.control.size().width
    }

    pub fn image_name(&self) -> Option<&str> {
        match &self.control.tree().get(self.image)?.content {
            Content::Image(img) => Some(img.name.as_str()),
            _ => None,
        }
    }

    pub fn set_image(&mut self, image: Option<(&str, Size)>) {
        let content = match image {
            Some((name, size)) => Content::Image(ImageContent {
                name: name.to_string(),
                size,
                mode: ContentMode::AspectFill,
                tint: None,
            }),
            None => Content::None,
        };
        if let Some(layer) = self.control.tree_mut().get_mut(self.image) {
            layer.content = content;
        }
        self.place_image();
    }

    /// Where the image is drawn before clipping.
    pub fn image_frame(&self) -> Rect {
        self.control
            .tree()
            .get(self.image)
            .map(|l| l.frame)
            .unwrap_or(Rect::ZERO)
    }

    fn place_image(&mut self) {
        let bounds = self.control.bounds();
        let tree = self.control.tree_mut();
        if let Some(layer) = tree.get_mut(self.image) {
            layer.frame = match &layer.content {
                Content::Image(img) => aspect_fill_rect(img.size, bounds),
                _ => bounds,
            };
        }
    }
}

impl Widget for RoundImageView {
    fn layers(&self) -> &LayerTree {
        self.control.tree()
    }

    /// Takes the largest square that fits `size` and rounds it fully.
    fn layout(&mut self, size: Size) {
        let side = size.width.min(size.height).max(0.0);
        self.control.resize(Size::new(side, side));
        self.control.set_corner_radius(side / 2.0);
        self.place_image();
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(DEFAULT_SIDE, DEFAULT_SIDE)
    }

    fn semantics(&self) -> Semantics {
        let s = Semantics::new(Role::Image);
        match self.image_name() {
            Some(name) => s.label(name),
            None => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_fill_covers_and_centers() {
        let r = aspect_fill_rect(Size::new(200.0, 100.0), Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(r, Rect::new(-25.0, 0.0, 100.0, 50.0));
    }
}
