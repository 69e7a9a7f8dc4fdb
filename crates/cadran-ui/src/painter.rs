use cadran_engine::coords::Vec2;
use cadran_engine::paint::Color;
use cadran_engine::scene::{DrawList, ZIndex};
use cadran_engine::text::{FontId, FontSystem};

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a high-level API and text
/// measurement. Each call draws on top of the previous one (z increases
/// monotonically), so paint order is visual order.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures the bounding box of `text` laid out at `size`.
    #[must_use]
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.measure_text(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Stroked line segment.
    pub fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color, round_cap: bool) {
        let z = self.next_z();
        self.draw_list.push_line(z, start, end, width, color, round_cap);
    }

    /// Solid filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color);
    }

    /// Text with `origin` at the top-left of the block.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
