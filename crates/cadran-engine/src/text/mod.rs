//! Text measurement.
//!
//! The engine measures glyph layouts so widgets can center text blocks;
//! rasterization is the host renderer's concern. Fonts are parsed with
//! `fontdue`.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
