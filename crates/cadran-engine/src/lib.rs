//! Cadran engine crate.
//!
//! Renderer-agnostic primitives for the clock-face widget: geometry and
//! paint types, the recorded draw stream, text measurement, and the
//! wall-clock / redraw seams. The host GUI framework executes the draw
//! stream and delivers the frames the clock asks for.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
