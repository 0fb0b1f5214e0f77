//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait that every frontend implements:
//! event polling, rendering and cleanup. The terminal frontend is the only
//! one today.

pub mod events;
pub mod tui;

use crate::core::Session;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - separates rendering and input plumbing from table logic
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns every event that arrives within one frame budget, converted to
    /// the frontend-agnostic `FrontendEvent` enum (empty if nothing happened).
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw one full frame of the session
    ///
    /// Called once per frame whether or not anything changed.
    fn render(&mut self, session: &Session) -> Result<()>;

    /// Restore the terminal (or close windows) before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current size of the rendering area in native units
    /// (character cells for the TUI)
    fn size(&self) -> (u16, u16);
}
