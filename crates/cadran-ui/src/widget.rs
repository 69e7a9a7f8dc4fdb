use cadran_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

/// The trait every UI component implements.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use cadran_ui::prelude::*;
///
/// pub struct Dot { color: Color, size: f32 }
///
/// impl Widget for Dot {
///     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         constraints.constrain(Vec2::new(self.size, self.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.center(), rect.size.x / 2.0, self.color);
///     }
/// }
/// ```
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — calling `measure` twice with the same
    /// arguments must return the same result. The parent may call `measure`
    /// multiple times.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the host — the widget draws inside
    /// it, deriving any per-frame geometry from this frame's rect (never
    /// from a previous one).
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
