use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Phase of a single pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer sample in the receiving widget's local coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    fn touch(event: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: PointerId(0),
            event,
            position,
        }
    }

    pub fn touch_down(position: Vec2) -> Self {
        Self::touch(PointerEventKind::Down, position)
    }

    pub fn touch_move(position: Vec2) -> Self {
        Self::touch(PointerEventKind::Move, position)
    }

    pub fn touch_up(position: Vec2) -> Self {
        Self::touch(PointerEventKind::Up, position)
    }

    pub fn touch_cancel(position: Vec2) -> Self {
        Self::touch(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

#[derive(Clone, Debug)]
pub struct TextInputEvent {
    pub text: String,
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    Text(TextInputEvent),
}

bitflags::bitflags! {
    /// Control-level events derived from raw pointer input, in the spirit of
    /// a touch control's target/action masks.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlEvents: u16 {
        const TOUCH_DOWN = 1 << 0;
        const TOUCH_DRAG_INSIDE = 1 << 2;
        const TOUCH_DRAG_OUTSIDE = 1 << 3;
        const TOUCH_DRAG_ENTER = 1 << 4;
        const TOUCH_DRAG_EXIT = 1 << 5;
        const TOUCH_UP_INSIDE = 1 << 6;
        const TOUCH_UP_OUTSIDE = 1 << 7;
        const TOUCH_CANCEL = 1 << 8;
        const VALUE_CHANGED = 1 << 12;

        /// Every way a touch sequence can end or leave the control abnormally.
        const ABNORMAL_END = Self::TOUCH_UP_OUTSIDE.bits()
            | Self::TOUCH_DRAG_EXIT.bits()
            | Self::TOUCH_CANCEL.bits()
            | Self::TOUCH_DRAG_OUTSIDE.bits();
    }
}
