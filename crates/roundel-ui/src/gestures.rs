use roundel_core::input::*;
use roundel_core::{Rect, Vec2};

/// Turns a raw pointer stream into control events for one control.
///
/// A sequence starts with a press inside `bounds` and follows that pointer
/// until it lifts or is cancelled; other pointers are ignored meanwhile.
#[derive(Debug, Default)]
pub struct ControlTracker {
    tracking: Option<Tracking>,
}

#[derive(Debug, Clone, Copy)]
struct Tracking {
    id: PointerId,
    inside: bool,
    last: Vec2,
}

impl ControlTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Whether the tracked touch is currently inside the control.
    pub fn is_touch_inside(&self) -> bool {
        self.tracking.is_some_and(|t| t.inside)
    }

    pub fn last_position(&self) -> Option<Vec2> {
        self.tracking.map(|t| t.last)
    }

    pub fn handle(&mut self, event: &PointerEvent, bounds: Rect) -> ControlEvents {
        let inside = bounds.contains(event.position);
        match event.event {
            PointerEventKind::Down => {
                if self.tracking.is_some() || !inside {
                    return ControlEvents::empty();
                }
                self.tracking = Some(Tracking {
                    id: event.id,
                    inside: true,
                    last: event.position,
                });
                ControlEvents::TOUCH_DOWN
            }
            PointerEventKind::Move => {
                let Some(t) = self.tracking.as_mut().filter(|t| t.id == event.id) else {
                    return ControlEvents::empty();
                };
                let was_inside = t.inside;
                t.inside = inside;
                t.last = event.position;
                match (was_inside, inside) {
                    (true, true) => ControlEvents::TOUCH_DRAG_INSIDE,
                    (false, true) => {
                        ControlEvents::TOUCH_DRAG_ENTER | ControlEvents::TOUCH_DRAG_INSIDE
                    }
                    (true, false) => {
                        ControlEvents::TOUCH_DRAG_EXIT | ControlEvents::TOUCH_DRAG_OUTSIDE
                    }
                    (false, false) => ControlEvents::TOUCH_DRAG_OUTSIDE,
                }
            }
            PointerEventKind::Up => {
                if !self.tracking.is_some_and(|t| t.id == event.id) {
                    return ControlEvents::empty();
                }
                self.tracking = None;
                if inside {
                    ControlEvents::TOUCH_UP_INSIDE
                } else {
                    ControlEvents::TOUCH_UP_OUTSIDE
                }
            }
            PointerEventKind::Cancel => {
                if !self.tracking.is_some_and(|t| t.id == event.id) {
                    return ControlEvents::empty();
                }
                self.tracking = None;
                ControlEvents::TOUCH_CANCEL
            }
        }
    }

    /// Drops the current sequence without emitting anything.
    pub fn reset(&mut self) {
        self.tracking = None;
    }
}
