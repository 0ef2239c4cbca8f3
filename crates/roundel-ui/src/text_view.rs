//! Multi-line text views: one that shows a placeholder while empty, and a
//! bordered variant that animates its border color.

use std::rc::Rc;
use std::sync::Arc;

use roundel_core::animation::{AnimationSpec, Clock, Easing, SystemClock};
use roundel_core::animator::Animator;
use roundel_core::input::{InputEvent, Key};
use roundel_core::{
    Color, Content, ControlEvents, Insets, Layer, LayerId, LayerTree, PointerEvent, Rect, Role,
    Semantics, Size, TextAlign, TextContent,
};
use web_time::Duration;

use crate::decoration::Decoration;
use crate::gestures::ControlTracker;
use crate::layout::{self, Anchors};
use crate::text::{self, TextBuffer};
use crate::widget::{Control, Widget};

pub const DEFAULT_FONT_SIZE: f32 = 14.0;
/// Extra lead of the placeholder past the left inset, matching where the
/// first glyph of typed text lands.
pub const PLACEHOLDER_LEAD: f32 = 5.0;

pub fn default_text_inset() -> Insets {
    Insets::new(8.0, 0.0, 8.0, 0.0)
}

fn text_layer(text: &str, color: Color, font_size: f32) -> Layer {
    Layer::default().content(Content::Text(TextContent {
        text: text.to_string(),
        color,
        font_size,
        align: TextAlign::Leading,
    }))
}

pub struct PlaceholderTextView {
    control: Control,
    body: LayerId,
    placeholder: LayerId,
    buffer: TextBuffer,
    font_size: f32,
    text_color: Color,
    inset: Insets,
    placeholder_text: String,
    placeholder_color: Color,
    editing: bool,
    tracker: ControlTracker,
    on_text_change: Option<Rc<dyn Fn(&str)>>,
}

impl PlaceholderTextView {
    pub fn new(size: Size) -> Self {
        Self::with_decoration(size, Decoration::default())
    }

    pub fn with_decoration(size: Size, decoration: Decoration) -> Self {
        let mut control = Control::new(size, decoration);
        let body = control
            .tree_mut()
            .push(text_layer("", Color::BLACK, DEFAULT_FONT_SIZE));
        let placeholder = control
            .tree_mut()
            .push(text_layer("", Color::LIGHT_GRAY, DEFAULT_FONT_SIZE));
        let mut view = Self {
            control,
            body,
            placeholder,
            buffer: TextBuffer::new(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: Color::BLACK,
            inset: default_text_inset(),
            placeholder_text: String::new(),
            placeholder_color: Color::LIGHT_GRAY,
            editing: false,
            tracker: ControlTracker::new(),
            on_text_change: None,
        };
        view.layout(size);
        view
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.text_changed();
    }

    /// Inserts at the caret.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffer.insert_text(text);
        self.text_changed();
    }

    pub fn delete_backward(&mut self) {
        if self.buffer.delete_backward() {
            self.text_changed();
        }
    }

    pub fn delete_forward(&mut self) {
        if self.buffer.delete_forward() {
            self.text_changed();
        }
    }

    /// Applies keyboard or committed text input while editing. Returns
    /// whether the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.editing {
            return false;
        }
        match event {
            InputEvent::Text(t) => self.insert(&t.text),
            InputEvent::Key(k) => match &k.key {
                Key::Character(c) => self.insert(c.encode_utf8(&mut [0u8; 4])),
                Key::Enter => self.insert("\n"),
                Key::Tab => self.insert("\t"),
                Key::Backspace => self.delete_backward(),
                Key::Delete => self.delete_forward(),
                Key::ArrowLeft => self.buffer.move_caret(-1),
                Key::ArrowRight => self.buffer.move_caret(1),
                Key::Home => self.buffer.move_home(),
                Key::End => self.buffer.move_end(),
                Key::Escape => self.end_editing(),
            },
            InputEvent::Pointer(p) => {
                self.handle_pointer(p);
            }
        }
        true
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_editing(&mut self) {
        if !self.editing {
            self.editing = true;
            log::debug!("text view editing");
        }
        self.refresh_placeholder();
    }

    pub fn end_editing(&mut self) {
        if self.editing {
            self.editing = false;
            log::debug!("text view done editing");
        }
        self.refresh_placeholder();
    }

    pub fn set_on_text_change(&mut self, f: impl Fn(&str) + 'static) {
        self.on_text_change = Some(Rc::new(f));
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Applies to the text and the placeholder alike.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        for id in [self.body, self.placeholder] {
            if let Some(text) = self
                .control
                .tree_mut()
                .get_mut(id)
                .and_then(|l| l.text_mut())
            {
                text.font_size = size;
            }
        }
        self.relayout();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        if let Some(text) = self
            .control
            .tree_mut()
            .get_mut(self.body)
            .and_then(|l| l.text_mut())
        {
            text.color = color;
        }
    }

    pub fn text_container_inset(&self) -> Insets {
        self.inset
    }

    pub fn set_text_container_inset(&mut self, inset: Insets) {
        self.inset = inset;
        self.relayout();
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    pub fn set_placeholder_text(&mut self, text: impl Into<String>) {
        self.placeholder_text = text.into();
        let text = self.placeholder_text.clone();
        if let Some(layer) = self.control.tree_mut().get_mut(self.placeholder) {
            layer.set_text(text);
        }
        self.relayout();
    }

    pub fn placeholder_color(&self) -> Color {
        self.placeholder_color
    }

    pub fn set_placeholder_color(&mut self, color: Color) {
        self.placeholder_color = color;
        if let Some(text) = self
            .control
            .tree_mut()
            .get_mut(self.placeholder)
            .and_then(|l| l.text_mut())
        {
            text.color = color;
        }
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.control
            .tree()
            .get(self.placeholder)
            .is_some_and(|l| !l.hidden)
    }

    pub fn placeholder_frame(&self) -> Rect {
        self.control
            .tree()
            .get(self.placeholder)
            .map(|l| l.frame)
            .unwrap_or(Rect::ZERO)
    }

    fn text_changed(&mut self) {
        let text = self.buffer.text().to_string();
        if let Some(layer) = self.control.tree_mut().get_mut(self.body) {
            layer.set_text(text.as_str());
        }
        self.refresh_placeholder();
        if let Some(f) = self.on_text_change.clone() {
            f(&text);
        }
    }

    fn refresh_placeholder(&mut self) {
        let hidden = !self.buffer.is_empty();
        if let Some(layer) = self.control.tree_mut().get_mut(self.placeholder) {
            layer.hidden = hidden;
        }
    }

    fn relayout(&mut self) {
        let size = self.control.size();
        self.layout(size);
    }

    fn placeholder_anchors(&self) -> Anchors {
        Anchors {
            left: Some(self.inset.left + PLACEHOLDER_LEAD),
            top: Some(self.inset.top),
            right: Some(0.0),
            height: Some(text::measure(&self.placeholder_text, self.font_size).height),
            ..Anchors::default()
        }
    }
}

impl Widget for PlaceholderTextView {
    fn layers(&self) -> &LayerTree {
        self.control.tree()
    }

    fn layout(&mut self, size: Size) {
        self.control.resize(size);
        let body = self.inset.inset(Rect::from_size(size));
        let anchors = self.placeholder_anchors();
        let placeholder = layout::resolve(size, anchors).unwrap_or_else(|err| {
            log::warn!("placeholder layout failed: {err}");
            let x = anchors.left.unwrap_or(0.0);
            Rect::new(
                x,
                self.inset.top,
                size.width - x,
                anchors.height.unwrap_or(0.0),
            )
        });

        let tree = self.control.tree_mut();
        if let Some(layer) = tree.get_mut(self.body) {
            layer.frame = body;
        }
        if let Some(layer) = tree.get_mut(self.placeholder) {
            layer.frame = placeholder;
        }
        self.refresh_placeholder();
    }

    fn semantics(&self) -> Semantics {
        let mut s = Semantics::new(Role::TextField).value(self.text());
        if !self.placeholder_text.is_empty() {
            s = s.label(self.placeholder_text.as_str());
        }
        s.focused = self.editing;
        s
    }

    /// A tap inside starts editing.
    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        let events = self.tracker.handle(event, self.control.bounds());
        if events.contains(ControlEvents::TOUCH_UP_INSIDE) {
            self.begin_editing();
        }
        events
    }
}

pub fn border_color_spec() -> AnimationSpec {
    AnimationSpec::tween(Duration::from_millis(250), Easing::Linear)
}

/// A placeholder text view with a thin rounded border whose color changes
/// are animated.
pub struct BorderedTextView {
    inner: PlaceholderTextView,
    animator: Animator<()>,
}

impl BorderedTextView {
    pub fn new(size: Size) -> Self {
        Self::with_clock(size, Arc::new(SystemClock))
    }

    pub fn with_clock(size: Size, clock: Arc<dyn Clock>) -> Self {
        let decoration = Decoration::default()
            .corner_radius(4.0)
            .border(1.0, Color::LIGHT_GRAY);
        Self {
            inner: PlaceholderTextView::with_decoration(size, decoration),
            animator: Animator::new(clock),
        }
    }

    pub fn text_view(&self) -> &PlaceholderTextView {
        &self.inner
    }

    pub fn text_view_mut(&mut self) -> &mut PlaceholderTextView {
        &mut self.inner
    }

    /// The committed border color; the drawn one may still be animating
    /// toward it.
    pub fn border_color(&self) -> Color {
        self.inner.control().decoration().border_color
    }

    /// Animates from whatever border color is showing to `color`.
    pub fn set_border_color(&mut self, color: Color) {
        log::debug!("border color -> {color}");
        self.inner
            .control_mut()
            .animate_border_color(&mut self.animator, color, border_color_spec());
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }
}

impl Widget for BorderedTextView {
    fn layers(&self) -> &LayerTree {
        self.inner.layers()
    }

    fn layout(&mut self, size: Size) {
        self.inner.layout(size);
    }

    fn semantics(&self) -> Semantics {
        self.inner.semantics()
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        self.inner.handle_pointer(event)
    }

    fn tick(&mut self) {
        let tree = self.inner.control_mut().tree_mut();
        self.animator.tick(tree);
    }
}
