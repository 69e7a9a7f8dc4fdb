use std::time::Duration;

use chrono::FixedOffset;

use cadran_engine::coords::{Rect, Vec2};
use cadran_engine::paint::Color;
use cadran_engine::text::FontId;
use cadran_engine::time::{RedrawScheduler, TimeSample, WallClock, default_offset};

use crate::constraints::{Constraints, Edges, LayoutCtx, inset_rect};
use crate::face::{
    self, FaceGeometry, MINOR_TICK_ALPHA, NUMERAL_STEP_DEG, STROKE_WIDTH_FACTOR, TICK_STEP_DEG,
};
use crate::painter::Painter;
use crate::widget::Widget;

/// Delay between self-scheduled frames: the face animates once a second.
const FRAME_INTERVAL: Duration = Duration::from_millis(1000);

/// Preferred square side when the host imposes no bounds. The default
/// needle lengths and numeral inset are tuned for a face around this size.
const PREFERRED_SIZE: f32 = 640.0;

// ── style ─────────────────────────────────────────────────────────────────

/// Immutable visual configuration for a [`ClockFace`].
///
/// Defaults reproduce the classic palette: white primary, light-gray
/// secondary. Pass a modified copy at construction; the widget never
/// mutates it.
#[derive(Debug, Clone)]
pub struct ClockStyle {
    pub center_inner: Color,
    pub center_outer: Color,
    pub seconds_needle: Color,
    pub hours_needle: Color,
    pub minutes_needle: Color,
    /// Degree tick color (minor ticks additionally dimmed).
    pub degrees: Color,
    /// Hour numeral color.
    pub hours_values: Color,
    /// Digital-mode numeral color.
    pub digits: Color,

    /// Padding reserved on each axis before the square face is sized.
    pub padding: Edges,
    /// Display zone. Defaults to UTC+8; set explicitly instead of
    /// assuming device locale.
    pub utc_offset: FixedOffset,
    pub font: FontId,

    /// Hour numeral size in logical pixels.
    pub numeral_size: f32,
    /// How far numerals sit inside the tick ring, in logical pixels.
    pub numeral_inset: f32,
    pub hour_needle_len: f32,
    pub minute_needle_len: f32,
    pub second_needle_len: f32,
    pub center_outer_radius: f32,
    pub center_inner_radius: f32,
    /// Digital text size as a fraction of the face width.
    pub digital_size_factor: f32,
    /// AM/PM suffix size relative to the digital body.
    pub meridiem_scale: f32,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            center_inner: Color::LIGHT_GRAY,
            center_outer: Color::WHITE,
            seconds_needle: Color::LIGHT_GRAY,
            hours_needle: Color::WHITE,
            minutes_needle: Color::WHITE,
            degrees: Color::WHITE,
            hours_values: Color::WHITE,
            digits: Color::WHITE,

            padding: Edges::default(),
            utc_offset: default_offset(),
            font: FontId::FALLBACK,

            numeral_size: 80.0,
            numeral_inset: 80.0,
            hour_needle_len: 150.0,
            minute_needle_len: 200.0,
            second_needle_len: 300.0,
            center_outer_radius: 12.0,
            center_inner_radius: 5.0,
            digital_size_factor: 0.2,
            meridiem_scale: 0.3,
        }
    }
}

// ── widget ────────────────────────────────────────────────────────────────

/// An analog/digital clock face.
///
/// Analog mode draws 60 degree ticks, 12 hour numerals, three needles and
/// a two-tone center dot; digital mode draws a centered `HH:MM:SS` label
/// with a small AM/PM suffix. Every paint schedules the next frame one
/// second out, so the face animates as long as the host keeps delivering
/// the frames it asks for.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockFace::new(
///     Box::new(SystemClock::new()),
///     Box::new(my_event_loop_handle),
/// );
/// clock.set_show_analog(false); // digital
/// ```
pub struct ClockFace {
    style: ClockStyle,
    show_analog: bool,
    clock: Box<dyn WallClock>,
    redraw: Box<dyn RedrawScheduler>,
}

impl ClockFace {
    pub fn new(clock: Box<dyn WallClock>, redraw: Box<dyn RedrawScheduler>) -> Self {
        Self {
            style: ClockStyle::default(),
            show_analog: true,
            clock,
            redraw,
        }
    }

    pub fn style(mut self, style: ClockStyle) -> Self {
        self.style = style;
        self
    }

    /// Switches between the analog and digital rendering paths and asks
    /// the host for an immediate redraw.
    pub fn set_show_analog(&mut self, show_analog: bool) {
        self.show_analog = show_analog;
        self.redraw.request_redraw(Duration::ZERO);
    }

    pub fn is_show_analog(&self) -> bool {
        self.show_analog
    }

    // ── analog path ───────────────────────────────────────────────────────

    fn paint_degrees(&self, painter: &mut Painter, geom: FaceGeometry) {
        let stroke = geom.width * STROKE_WIDTH_FACTOR;
        for i in 0..60u32 {
            let deg = i * TICK_STEP_DEG;
            let color = if face::tick_is_emphasized(deg) {
                self.style.degrees
            } else {
                self.style.degrees.scale_alpha(MINOR_TICK_ALPHA)
            };
            let (outer, inner) = face::tick_line(geom, deg);
            painter.line(outer, inner, stroke, color, true);
        }
    }

    fn paint_hours_values(&self, painter: &mut Painter, geom: FaceGeometry) {
        for slot in 0..12u32 {
            let deg = slot * NUMERAL_STEP_DEG;
            let label = face::hour_label(deg).to_string();
            let bounds = painter.measure_text(&label, self.style.font, self.style.numeral_size);
            let center = face::numeral_center(geom, deg, self.style.numeral_inset);
            // Center the numeral on its bounding box, not its left edge.
            let origin = center - bounds / 2.0;
            painter.text(
                label,
                self.style.font,
                self.style.numeral_size,
                self.style.hours_values,
                origin,
            );
        }
    }

    fn paint_needles(&self, painter: &mut Painter, geom: FaceGeometry, sample: TimeSample) {
        let stroke = geom.width * STROKE_WIDTH_FACTOR;
        let needles = [
            (face::hour_angle_deg(sample), self.style.hour_needle_len, self.style.hours_needle),
            (
                face::minute_angle_deg(sample),
                self.style.minute_needle_len,
                self.style.minutes_needle,
            ),
            (
                face::second_angle_deg(sample),
                self.style.second_needle_len,
                self.style.seconds_needle,
            ),
        ];
        for (angle, len, color) in needles {
            let tip = face::needle_tip(geom.center, angle, len);
            painter.line(geom.center, tip, stroke, color, true);
        }
    }

    fn paint_center(&self, painter: &mut Painter, geom: FaceGeometry) {
        // Outer first; the inner dot overlays it.
        painter.fill_circle(geom.center, self.style.center_outer_radius, self.style.center_outer);
        painter.fill_circle(geom.center, self.style.center_inner_radius, self.style.center_inner);
    }

    // ── digital path ──────────────────────────────────────────────────────

    fn paint_digits(&self, painter: &mut Painter, geom: FaceGeometry, sample: TimeSample) {
        let label = face::digital_label(sample);
        let (body, suffix) = label.split_at(label.len() - 2);

        let body_size = geom.width * self.style.digital_size_factor;
        let suffix_size = body_size * self.style.meridiem_scale;
        let body_bounds = painter.measure_text(body, self.style.font, body_size);
        let suffix_bounds = painter.measure_text(suffix, self.style.font, suffix_size);

        // Center the combined block on the face center; the small suffix
        // sits after the body, bottom-aligned to it.
        let origin = Vec2::new(
            geom.center.x - (body_bounds.x + suffix_bounds.x) / 2.0,
            geom.center.y - body_bounds.y / 2.0,
        );
        painter.text(body.to_owned(), self.style.font, body_size, self.style.digits, origin);
        painter.text(
            suffix.to_owned(),
            self.style.font,
            suffix_size,
            self.style.digits,
            Vec2::new(origin.x + body_bounds.x, origin.y + body_bounds.y - suffix_bounds.y),
        );
    }
}

impl Widget for ClockFace {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let pad = self.style.padding;
        let mut side = face::square_size(constraints.max, pad);
        if !side.is_finite() {
            side = PREFERRED_SIZE;
        }
        constraints.constrain(Vec2::new(side + pad.h(), side + pad.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // One follow-up frame per paint, in both modes. Requested before
        // the degenerate-rect bailout so a transient zero-size layout pass
        // cannot stall the animation loop.
        self.redraw.request_redraw(FRAME_INTERVAL);

        let inner = inset_rect(rect, self.style.padding);
        if inner.is_empty() {
            return;
        }

        // Geometry is re-derived from this frame's rect; nothing is cached.
        let geom = FaceGeometry::from_rect(inner);
        let sample = TimeSample::at(self.clock.now(), self.style.utc_offset);
        log::trace!(
            "clock frame: {:02}:{:02}:{:02} analog={} width={}",
            sample.hour12,
            sample.minute,
            sample.second,
            self.show_analog,
            geom.width,
        );

        if self.show_analog {
            self.paint_degrees(painter, geom);
            self.paint_hours_values(painter, geom);
            self.paint_needles(painter, geom, sample);
            self.paint_center(painter, geom);
        } else {
            self.paint_digits(painter, geom, sample);
        }
    }
}
