use cadran_engine::coords::{Rect, Vec2};
use cadran_engine::scene::DrawList;
use cadran_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` that is repopulated each frame
/// by [`frame_ref`](Self::frame_ref). The host renderer receives the
/// returned `&mut DrawList` and executes it.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(include_bytes!("my_font.ttf"))?;
///
/// // In your on_frame callback:
/// let draw_list = ui.frame_ref(&clock_face, viewport);
/// renderer.execute(draw_list);
/// ```
pub struct UiScene {
    /// Fonts are public so hosts can measure text outside of a frame.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Renders one frame of `root` into the scene's draw list.
    ///
    /// Clears the previous frame, measures the root against the loose
    /// viewport constraints, then paints it into its measured box centered
    /// in the viewport. The widget persists in the caller across frames,
    /// so stateful widgets (the clock's mode flag) keep their state.
    #[must_use]
    pub fn frame_ref(&mut self, root: &dyn Widget, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(Constraints::loose(viewport), &ctx);
        let origin = Vec2::new(
            ((viewport.x - size.x) / 2.0).max(0.0),
            ((viewport.y - size.y) / 2.0).max(0.0),
        );

        let rect = Rect::from_origin_size(origin, size);
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        root.paint(&mut painter, rect);

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
