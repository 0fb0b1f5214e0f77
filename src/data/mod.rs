//! Data layer - Pure state without UI coupling
//!
//! Cards, geometry, colors and input events as plain data structures.
//! NO imports from frontend/ or any rendering code.

pub mod card;
pub mod color;
pub mod geometry;
pub mod input;

pub use card::*;
pub use color::*;
pub use geometry::*;
pub use input::*;
