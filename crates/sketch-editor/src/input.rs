//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus gestures into a unified `InputEvent`
//! enum. Pointer events carry canvas-local coordinates and map one-to-one
//! onto the start / move / end phases of a drawing gesture.

use sketch_core::Point;

/// A normalized input event from any pointing device or keyboard.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pencil contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while tracked.
    PointerMove { x: f32, y: f32 },

    /// Pointer released or the gesture was handed back by the host.
    PointerUp { x: f32, y: f32 },

    /// Keyboard shortcut.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Build a pointer event from a host callback's phase tag.
    pub fn from_phase(phase: GesturePhase, x: f32, y: f32) -> Self {
        match phase {
            GesturePhase::Start => Self::PointerDown { x, y },
            GesturePhase::Move => Self::PointerMove { x, y },
            GesturePhase::End => Self::PointerUp { x, y },
        }
    }

    /// Key press without modifiers.
    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some(Point::new(*x, *y))
            }
            Self::Key { .. } => None,
        }
    }

    pub fn phase(&self) -> Option<GesturePhase> {
        match self {
            Self::PointerDown { .. } => Some(GesturePhase::Start),
            Self::PointerMove { .. } => Some(GesturePhase::Move),
            Self::PointerUp { .. } => Some(GesturePhase::End),
            Self::Key { .. } => None,
        }
    }
}
