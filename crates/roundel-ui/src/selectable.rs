use roundel_core::{Color, ControlEvents, LayerTree, PointerEvent, Semantics, Size};

use crate::rounded::{ButtonState, RoundedCornerButton};
use crate::widget::Widget;

/// A rounded button that toggles between two color schemes. The selected
/// scheme fills with `selected_background` and outlines with
/// `deselected_background`; the deselected scheme swaps them.
pub struct SelectableButton {
    button: RoundedCornerButton,
    selected_background: Color,
    deselected_background: Color,
    touch_to_select: bool,
}

impl SelectableButton {
    pub fn new(title: impl Into<String>) -> Self {
        let mut button = RoundedCornerButton::new(title);
        button.set_corner_radius(4.0);
        button.control_mut().set_border_width(1.0);
        let mut this = Self {
            button,
            selected_background: Color::LIGHT_GRAY,
            deselected_background: Color::DARK_GRAY,
            touch_to_select: true,
        };
        this.update_colors();
        this
    }

    pub fn button(&self) -> &RoundedCornerButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut RoundedCornerButton {
        &mut self.button
    }

    pub fn is_selected(&self) -> bool {
        self.button.is_selected()
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.button.set_selected(selected);
        self.update_colors();
    }

    pub fn touch_to_select(&self) -> bool {
        self.touch_to_select
    }

    pub fn set_touch_to_select(&mut self, on: bool) {
        self.touch_to_select = on;
    }

    pub fn selected_background(&self) -> Color {
        self.selected_background
    }

    pub fn set_selected_background(&mut self, color: Color) {
        self.selected_background = color;
        self.update_colors();
    }

    pub fn deselected_background(&self) -> Color {
        self.deselected_background
    }

    pub fn set_deselected_background(&mut self, color: Color) {
        self.deselected_background = color;
        self.update_colors();
    }

    /// Re-derives background, border, title and tint from the selection.
    pub fn update_colors(&mut self) {
        let (fill, edge) = if self.is_selected() {
            (self.selected_background, self.deselected_background)
        } else {
            (self.deselected_background, self.selected_background)
        };
        let control = self.button.control_mut();
        control.set_background(fill);
        control.set_border_color(edge);
        self.button
            .set_title_color(ButtonState::Normal, self.selected_background);
        self.button
            .set_title_color(ButtonState::Selected, self.deselected_background);
        self.button.set_image_tint(Some(edge));
    }
}

impl Widget for SelectableButton {
    fn layers(&self) -> &LayerTree {
        self.button.layers()
    }

    fn layout(&mut self, size: Size) {
        self.button.layout(size);
    }

    fn intrinsic_size(&self) -> Size {
        self.button.intrinsic_size()
    }

    fn semantics(&self) -> Semantics {
        self.button.semantics().selected(self.is_selected())
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        let events = self.button.handle_pointer(event);
        if events.contains(ControlEvents::TOUCH_UP_INSIDE) && self.touch_to_select {
            let selected = !self.is_selected();
            self.set_selected(selected);
            log::debug!("{:?} selected: {selected}", self.button.title());
        }
        events
    }
}
