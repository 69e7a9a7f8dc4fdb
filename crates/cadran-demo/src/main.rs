//! Headless driver for the clock face.
//!
//! Stands in for a real GUI host: it runs the render-then-schedule loop
//! by sleeping for whatever delay the widget requests, logging a summary
//! of each recorded frame. Halfway through it flips to digital mode to
//! exercise both render paths.
//!
//! Usage: `cadran-demo [frames]` (default 10).

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use cadran_engine::logging::{LoggingConfig, init_logging};
use cadran_ui::prelude::*;

/// Hands the requested delay back to the driving loop.
///
/// A windowed host would forward this to its event loop instead; here the
/// loop itself sleeps for the shortest requested delay.
#[derive(Clone, Default)]
struct LoopScheduler(Rc<Cell<Option<Duration>>>);

impl LoopScheduler {
    fn take(&self) -> Option<Duration> {
        self.0.take()
    }
}

impl RedrawScheduler for LoopScheduler {
    fn request_redraw(&self, delay: Duration) {
        let next = match self.0.get() {
            Some(pending) => pending.min(delay),
            None => delay,
        };
        self.0.set(Some(next));
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let frames: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("frame count must be a number")?,
        None => 10,
    };

    let scheduler = LoopScheduler::default();
    let mut clock = ClockFace::new(
        Box::new(SystemClock::new()),
        Box::new(scheduler.clone()),
    );

    let mut scene = UiScene::new();
    let viewport = Vec2::new(800.0, 800.0);

    log::info!("rendering {frames} frames into a {}x{} viewport", viewport.x, viewport.y);

    for frame in 0..frames {
        if frame == frames / 2 {
            clock.set_show_analog(false);
            log::info!("switched to digital mode");
        }

        let draw_list = scene.frame_ref(&clock, viewport);
        let digital = draw_list.items().iter().find_map(|item| match &item.cmd {
            DrawCmd::Text(t) => Some(t.text.clone()),
            _ => None,
        });
        log::info!(
            "frame {frame}: {} draw commands{}",
            draw_list.len(),
            digital.map(|t| format!(", first text {t:?}")).unwrap_or_default(),
        );

        // The widget asked for its next frame; honor the shortest delay.
        if let Some(delay) = scheduler.take() {
            thread::sleep(delay);
        }
    }

    Ok(())
}
