//! Wall-clock and redraw-scheduling seams.
//!
//! Both are traits so the widget can be driven deterministically in tests:
//! substitute a fixed clock and a recording scheduler, then assert on the
//! resulting draw stream and redraw requests.

mod clock;
mod scheduler;

pub use clock::{Meridiem, SystemClock, TimeSample, WallClock, default_offset};
pub use scheduler::RedrawScheduler;
