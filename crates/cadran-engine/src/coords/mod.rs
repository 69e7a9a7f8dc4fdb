//! Coordinate and geometry types shared between the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The clock face inverts the Y term of its trigonometry (`cy - r*sin`)
//! to express math-convention angles in this space.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
