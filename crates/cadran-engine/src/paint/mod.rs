//! Paint model shared between the UI layer and host renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! The clock face paints solids only, so draw commands carry `Color`
//! directly. Geometry types remain in `coords`.

mod color;

pub use color::Color;
