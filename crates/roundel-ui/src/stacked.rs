use roundel_core::{ControlEvents, Insets, LayerTree, PointerEvent, Semantics, Size};

use crate::selectable::SelectableButton;
use crate::widget::Widget;

pub const DEFAULT_PADDING: f32 = 6.0;

/// A selectable button with its image stacked above its title, `padding`
/// apart, the pair centered in the button.
pub struct StackedButton {
    inner: SelectableButton,
    padding: f32,
}

impl StackedButton {
    pub fn new(title: impl Into<String>) -> Self {
        let mut this = Self {
            inner: SelectableButton::new(title),
            padding: DEFAULT_PADDING,
        };
        this.adjust_insets();
        this
    }

    pub fn selectable(&self) -> &SelectableButton {
        &self.inner
    }

    pub fn selectable_mut(&mut self) -> &mut SelectableButton {
        &mut self.inner
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
        self.adjust_insets();
    }

    pub fn set_image(&mut self, image: Option<(&str, Size)>) {
        self.inner.button_mut().set_image(image);
        self.adjust_insets();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.inner.button_mut().set_title(title);
        self.adjust_insets();
    }

    /// Moves the image up and the title down so they stack instead of
    /// sitting side by side. A missing image or title counts as zero size.
    pub fn adjust_insets(&mut self) {
        let button = self.inner.button_mut();
        let image = button.image_size();
        let title = button.title_size();
        let total = image.height + title.height + self.padding;

        button.set_image_insets(Insets::new(-(total - image.height), 0.0, 0.0, -title.width));
        button.set_title_insets(Insets::new(0.0, -image.width, -(total - title.height), 0.0));
    }
}

impl Widget for StackedButton {
    fn layers(&self) -> &LayerTree {
        self.inner.layers()
    }

    fn layout(&mut self, size: Size) {
        self.inner.layout(size);
        self.adjust_insets();
    }

    fn intrinsic_size(&self) -> Size {
        let button = self.inner.button();
        let image = button.image_size();
        let title = button.title_size();
        Size::new(
            image.width.max(title.width) + 16.0,
            image.height + title.height + self.padding + 8.0,
        )
    }

    fn semantics(&self) -> Semantics {
        self.inner.semantics()
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        self.inner.handle_pointer(event)
    }
}
