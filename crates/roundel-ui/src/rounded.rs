//! Rounded, bordered views and buttons.

use std::rc::Rc;

use roundel_core::{
    Color, Content, ContentMode, ControlEvents, ImageContent, Insets, Layer, LayerId, LayerTree,
    PointerEvent, Rect, Role, Semantics, Size, TextAlign, TextContent,
};

use crate::decoration::Decoration;
use crate::gestures::ControlTracker;
use crate::text;
use crate::widget::{Control, Widget};

/// A plain container with a 2pt light gray border and 4pt clipped corners.
pub struct RoundedCornerView {
    control: Control,
}

impl RoundedCornerView {
    pub fn new(size: Size) -> Self {
        Self {
            control: Control::new(size, Decoration::rounded()),
        }
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// Appends a child layer on top of the view's content.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.control.tree_mut().push(layer)
    }
}

impl Widget for RoundedCornerView {
    fn layers(&self) -> &LayerTree {
        self.control.tree()
    }

    fn layout(&mut self, size: Size) {
        self.control.resize(size);
    }

    fn semantics(&self) -> Semantics {
        Semantics::new(Role::Container)
    }
}

/// Which title color a button shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Normal,
    Selected,
}

pub const BUTTON_TITLE_FONT_SIZE: f32 = 15.0;

/// A rounded button with a title and an optional image laid side by side
/// and centered. Insets nudge each one the way edge insets do: the rect
/// moves by half the difference of opposite edges.
pub struct RoundedCornerButton {
    control: Control,
    title: LayerId,
    image: Option<LayerId>,
    title_colors: [Color; 2],
    image_tint: Option<Color>,
    selected: bool,
    title_insets: Insets,
    image_insets: Insets,
    tracker: ControlTracker,
    on_click: Option<Rc<dyn Fn()>>,
}

impl RoundedCornerButton {
    pub fn new(title: impl Into<String>) -> Self {
        let decoration = Decoration::rounded().masks_to_bounds(false);
        let mut control = Control::new(Size::ZERO, decoration);
        let title = control.tree_mut().push(Layer::default().content(Content::Text(
            TextContent {
                text: title.into(),
                color: Color::BLACK,
                font_size: BUTTON_TITLE_FONT_SIZE,
                align: TextAlign::Center,
            },
        )));
        let mut button = Self {
            control,
            title,
            image: None,
            title_colors: [Color::BLACK, Color::BLACK],
            image_tint: None,
            selected: false,
            title_insets: Insets::ZERO,
            image_insets: Insets::ZERO,
            tracker: ControlTracker::new(),
            on_click: None,
        };
        let size = button.intrinsic_size();
        button.layout(size);
        button
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// Rounding the corners also turns clipping on.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.control.set_corner_radius(radius);
        self.control.set_masks_to_bounds(true);
    }

    pub fn title(&self) -> &str {
        self.control
            .tree()
            .get(self.title)
            .and_then(|l| l.text())
            .unwrap_or("")
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(layer) = self.control.tree_mut().get_mut(self.title) {
            layer.set_text(title);
        }
        self.relayout();
    }

    pub fn title_layer(&self) -> LayerId {
        self.title
    }

    pub fn image_layer(&self) -> Option<LayerId> {
        self.image
    }

    /// Sets (or with `None`, removes) the image by name and natural size.
    pub fn set_image(&mut self, image: Option<(&str, Size)>) {
        if let Some(old) = self.image.take() {
            self.control.tree_mut().remove(old);
        }
        if let Some((name, size)) = image {
            let layer = Layer::default().content(Content::Image(ImageContent {
                name: name.to_string(),
                size,
                mode: ContentMode::AspectFit,
                tint: self.image_tint,
            }));
            self.image = Some(self.control.tree_mut().push(layer));
        }
        self.relayout();
    }

    pub fn title_size(&self) -> Size {
        text::measure(self.title(), BUTTON_TITLE_FONT_SIZE)
    }

    /// Natural size of the image; zero without one.
    pub fn image_size(&self) -> Size {
        self.image
            .and_then(|id| self.control.tree().get(id))
            .and_then(|l| match &l.content {
                Content::Image(img) => Some(img.size),
                _ => None,
            })
            .unwrap_or(Size::ZERO)
    }

    pub fn title_color(&self, state: ButtonState) -> Color {
        self.title_colors[state as usize]
    }

    pub fn set_title_color(&mut self, state: ButtonState, color: Color) {
        self.title_colors[state as usize] = color;
        self.apply_title_color();
    }

    pub fn image_tint(&self) -> Option<Color> {
        self.image_tint
    }

    pub fn set_image_tint(&mut self, tint: Option<Color>) {
        self.image_tint = tint;
        if let Some(Content::Image(img)) = self
            .image
            .and_then(|id| self.control.tree_mut().get_mut(id))
            .map(|l| &mut l.content)
        {
            img.tint = tint;
        }
    }

    pub fn state(&self) -> ButtonState {
        if self.selected {
            ButtonState::Selected
        } else {
            ButtonState::Normal
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.apply_title_color();
    }

    pub fn title_insets(&self) -> Insets {
        self.title_insets
    }

    pub fn set_title_insets(&mut self, insets: Insets) {
        self.title_insets = insets;
        self.relayout();
    }

    pub fn image_insets(&self) -> Insets {
        self.image_insets
    }

    pub fn set_image_insets(&mut self, insets: Insets) {
        self.image_insets = insets;
        self.relayout();
    }

    pub fn title_frame(&self) -> Rect {
        self.control
            .tree()
            .get(self.title)
            .map(|l| l.frame)
            .unwrap_or(Rect::ZERO)
    }

    pub fn image_frame(&self) -> Option<Rect> {
        self.image
            .and_then(|id| self.control.tree().get(id))
            .map(|l| l.frame)
    }

    pub fn set_on_click(&mut self, f: impl Fn() + 'static) {
        self.on_click = Some(Rc::new(f));
    }

    fn apply_title_color(&mut self) {
        let color = self.title_color(self.state());
        if let Some(text) = self
            .control
            .tree_mut()
            .get_mut(self.title)
            .and_then(|l| l.text_mut())
        {
            text.color = color;
        }
    }

    fn relayout(&mut self) {
        let size = self.control.size();
        self.layout(size);
    }
}

fn nudge(r: Rect, insets: Insets) -> Rect {
    r.offset(
        (insets.left - insets.right) / 2.0,
        (insets.top - insets.bottom) / 2.0,
    )
}

impl Widget for RoundedCornerButton {
    fn layers(&self) -> &LayerTree {
        self.control.tree()
    }

    fn layout(&mut self, size: Size) {
        self.control.resize(size);
        let image = self.image_size();
        let title = self.title_size();
        let x0 = (size.width - image.width - title.width) / 2.0;

        let image_frame = nudge(
            Rect::new(
                x0,
                (size.height - image.height) / 2.0,
                image.width,
                image.height,
            ),
            self.image_insets,
        );
        let title_frame = nudge(
            Rect::new(
                x0 + image.width,
                (size.height - title.height) / 2.0,
                title.width,
                title.height,
            ),
            self.title_insets,
        );

        let tree = self.control.tree_mut();
        if let Some(layer) = self.image.and_then(|id| tree.get_mut(id)) {
            layer.frame = image_frame;
        }
        if let Some(layer) = tree.get_mut(self.title) {
            layer.frame = title_frame;
        }
    }

    /// Content plus 8pt horizontal and 4pt vertical padding.
    fn intrinsic_size(&self) -> Size {
        let image = self.image_size();
        let title = self.title_size();
        Size::new(
            image.width + title.width + 16.0,
            image.height.max(title.height) + 8.0,
        )
    }

    fn semantics(&self) -> Semantics {
        Semantics::new(Role::Button).label(self.title())
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        let events = self.tracker.handle(event, self.control.bounds());
        if events.contains(ControlEvents::TOUCH_UP_INSIDE)
            && let Some(f) = self.on_click.clone()
        {
            f();
        }
        events
    }
}
