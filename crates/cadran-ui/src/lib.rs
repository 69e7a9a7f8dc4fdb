//! Cadran UI — a clock-face widget on top of `cadran-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use cadran_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut clock = ClockFace::new(Box::new(SystemClock::new()), Box::new(host_scheduler));
//!
//! // In your frame callback:
//! let draw_list = scene.frame_ref(&clock, viewport);
//! // Execute draw_list with your renderer; deliver the next frame when the
//! // scheduler's requested delay elapses (the clock asks for one every second).
//! ```
//!
//! The widget draws an analog face (degree ticks, hour numerals, three
//! needles, center dot) or a centered digital `HH:MM:SS` label, switched by
//! [`ClockFace::set_show_analog`].

pub mod constraints;
pub mod face;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to embed the clock — import this in your host glue.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::clock::{ClockFace, ClockStyle};

    // Re-export the engine primitives host glue needs.
    pub use cadran_engine::coords::{Rect, Vec2};
    pub use cadran_engine::paint::Color;
    pub use cadran_engine::scene::{DrawCmd, DrawList};
    pub use cadran_engine::text::FontId;
    pub use cadran_engine::time::{
        Meridiem, RedrawScheduler, SystemClock, TimeSample, WallClock,
    };
}
