//! Core table logic
//!
//! The deck, the session state machine and the render pass.
//! NO imports from frontend/ or terminal code: rendering goes through the
//! `Surface` trait, which frontends implement.

pub mod deck;
pub mod render;
pub mod session;

pub use deck::Deck;
pub use render::{render_frame, Surface};
pub use session::{DragState, Session};
