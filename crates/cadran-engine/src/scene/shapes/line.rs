use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    /// Round stroke caps. The clock's ticks and needles use round caps.
    pub round_cap: bool,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, width: f32, color: Color, round_cap: bool) -> Self {
        Self { start, end, width, color, round_cap }
    }
}

impl DrawList {
    /// Records a stroked line draw command.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        start: Vec2,
        end: Vec2,
        width: f32,
        color: Color,
        round_cap: bool,
    ) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, width, color, round_cap)));
    }
}
