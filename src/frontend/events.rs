//! Frontend-agnostic input events.
//!
//! Individual frontends translate their native event streams (crossterm, ...)
//! into this enum so the main loop only handles one event shape.

use crate::data::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Pointer input, already mapped to logical table units
    Pointer(InputEvent),
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    pub fn pointer(event: InputEvent) -> Self {
        Self::Pointer(event)
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    pub fn quit() -> Self {
        Self::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PointerButton;

    #[test]
    fn test_event_creation() {
        let pointer = FrontendEvent::pointer(InputEvent::up(PointerButton::Primary));
        assert!(matches!(pointer, FrontendEvent::Pointer(InputEvent::Up { .. })));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let quit_event = FrontendEvent::quit();
        assert!(matches!(quit_event, FrontendEvent::Quit));
    }
}
