//! Pointer input as the session sees it, already in logical units.

use super::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Picks up, draws and drags cards
    Primary,
    /// Flips cards
    Secondary,
}

/// Pointer events consumed by the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Down { button: PointerButton, pos: Point },
    Up { button: PointerButton },
    Move { pos: Point },
}

impl InputEvent {
    pub fn down(button: PointerButton, x: i32, y: i32) -> Self {
        Self::Down {
            button,
            pos: Point::new(x, y),
        }
    }

    pub fn up(button: PointerButton) -> Self {
        Self::Up { button }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::Move {
            pos: Point::new(x, y),
        }
    }
}
