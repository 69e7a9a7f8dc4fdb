//! Clock-face geometry and formatting.
//!
//! Everything here is pure math over a [`FaceGeometry`] derived from the
//! frame's rect. Angle convention: screen-space 0° is due right,
//! increasing counter-clockwise, with the Y term inverted
//! (`y = cy - r*sin`) for the top-left-origin canvas. The needle formulas
//! use the complementary `180 - ...` form with `(sin, cos)` endpoints,
//! which lands 12 at the top of the dial.

use cadran_engine::coords::{Rect, Vec2};
use cadran_engine::time::{Meridiem, TimeSample};

use crate::constraints::Edges;

/// Degrees between adjacent ticks (60 ticks around the dial).
pub const TICK_STEP_DEG: u32 = 6;

/// Degrees between adjacent hour numerals.
pub const NUMERAL_STEP_DEG: u32 = 30;

/// Alpha factor applied to non-emphasized ticks (140/255 in the default
/// palette).
pub const MINOR_TICK_ALPHA: f32 = 140.0 / 255.0;

/// Tick/needle stroke width as a fraction of the face width.
pub const STROKE_WIDTH_FACTOR: f32 = 0.010;

/// Ticks start this fraction of the width inside the rim…
pub const TICK_OUTER_INSET: f32 = 0.01;

/// …and end this far in (ticks point inward from near the rim).
pub const TICK_INNER_INSET: f32 = 0.05;

// ── geometry ──────────────────────────────────────────────────────────────

/// Per-frame face geometry.
///
/// Derived from the frame's rect before any drawing; never cached across
/// frames, so a resize can never leave a stale center or radius behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Side of the square face: `min(rect.w, rect.h)`.
    pub width: f32,
    pub center: Vec2,
    pub radius: f32,
}

impl FaceGeometry {
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let width = rect.size.x.min(rect.size.y);
        let half = width / 2.0;
        Self {
            width,
            center: Vec2::new(rect.origin.x + half, rect.origin.y + half),
            radius: half,
        }
    }

    /// A point at `radius` from the center, at `deg` in screen-math
    /// convention (0° right, counter-clockwise, Y inverted).
    #[must_use]
    pub fn point_at(self, deg: f32, radius: f32) -> Vec2 {
        let (sin, cos) = deg.to_radians().sin_cos();
        Vec2::new(self.center.x + radius * cos, self.center.y - radius * sin)
    }
}

/// The square content side for an available area minus per-axis padding.
///
/// The widget always measures as a square regardless of the parent's
/// width/height split, preserving the face's aspect ratio.
#[must_use]
pub fn square_size(available: Vec2, padding: Edges) -> f32 {
    (available.x - padding.h())
        .min(available.y - padding.v())
        .max(0.0)
}

// ── ticks ─────────────────────────────────────────────────────────────────

/// Whether the tick at `deg` is drawn at full opacity.
///
/// Quadrant ticks (90° multiples) and hour ticks (15° multiples that the
/// 6° grid actually hits, i.e. 30° multiples) are emphasized; the rest are
/// dimmed to [`MINOR_TICK_ALPHA`].
#[must_use]
pub fn tick_is_emphasized(deg: u32) -> bool {
    deg % 90 == 0 || deg % 15 == 0
}

/// Endpoints of the tick at `deg`: (outer, inner), pointing inward.
#[must_use]
pub fn tick_line(geom: FaceGeometry, deg: u32) -> (Vec2, Vec2) {
    let outer = geom.radius - geom.width * TICK_OUTER_INSET;
    let inner = geom.radius - geom.width * TICK_INNER_INSET;
    let deg = deg as f32;
    (geom.point_at(deg, outer), geom.point_at(deg, inner))
}

// ── hour numerals ─────────────────────────────────────────────────────────

/// Maps an angle slot (`deg` in `{0, 30, …, 330}`) to the displayed hour.
///
/// Slot 0° is due right in math convention; the remap puts 12 at the top
/// and 3 at the right, a bijection onto `1..=12`.
#[must_use]
pub fn hour_label(deg: u32) -> u32 {
    let hour = (360 + 90 - deg) / 30;
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// Center point of the numeral at `deg`, `inset` pixels inside the tick
/// ring.
#[must_use]
pub fn numeral_center(geom: FaceGeometry, deg: u32, inset: f32) -> Vec2 {
    let radius = geom.radius - geom.width * TICK_INNER_INSET - inset;
    geom.point_at(deg as f32, radius)
}

// ── needles ───────────────────────────────────────────────────────────────

/// Hour-needle angle in degrees; the minute fraction makes the hour hand
/// creep smoothly between numerals.
#[must_use]
pub fn hour_angle_deg(sample: TimeSample) -> f32 {
    180.0 - (sample.hour12 as f32 + sample.minute as f32 / 60.0) * 360.0 / 12.0
}

/// Minute-needle angle in degrees, carrying the second fraction.
#[must_use]
pub fn minute_angle_deg(sample: TimeSample) -> f32 {
    180.0 - (sample.minute as f32 + sample.second as f32 / 60.0) * 360.0 / 60.0
}

/// Second-needle angle in degrees (exact, no fractional carry).
#[must_use]
pub fn second_angle_deg(sample: TimeSample) -> f32 {
    180.0 - sample.second as f32 * 360.0 / 60.0
}

/// Needle tip `len` pixels from `center`.
///
/// The `180 -` convention in the angle functions pairs with this
/// `(sin, cos)` endpoint form: at angle 180° the tip is straight up.
#[must_use]
pub fn needle_tip(center: Vec2, angle_deg: f32, len: f32) -> Vec2 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Vec2::new(center.x + len * sin, center.y + len * cos)
}

// ── digital label ─────────────────────────────────────────────────────────

/// Formats the digital label: zero-padded `HH:MM:SS` plus `AM`/`PM`.
///
/// The hour field counts within the half-day (`00`–`11`), so noon and
/// midnight display as `00`. The analog needle is unaffected by the
/// 12-vs-0 representation; the 360° offset cancels in sin/cos.
#[must_use]
pub fn digital_label(sample: TimeSample) -> String {
    let suffix = match sample.meridiem {
        Meridiem::Am => "AM",
        Meridiem::Pm => "PM",
    };
    format!(
        "{:02}:{:02}:{:02}{}",
        sample.hour12 % 12,
        sample.minute,
        sample.second,
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample(hour12: u32, minute: u32, second: u32, meridiem: Meridiem) -> TimeSample {
        TimeSample { hour12, minute, second, meridiem }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn geometry_derives_from_smaller_axis() {
        let geom = FaceGeometry::from_rect(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(geom.width, 300.0);
        assert_eq!(geom.radius, 150.0);
        assert_eq!(geom.center, Vec2::new(150.0, 150.0));
    }

    #[test]
    fn geometry_respects_rect_origin() {
        let geom = FaceGeometry::from_rect(Rect::new(10.0, 20.0, 100.0, 100.0));
        assert_eq!(geom.center, Vec2::new(60.0, 70.0));
    }

    #[test]
    fn point_at_inverts_y() {
        let geom = FaceGeometry::from_rect(Rect::new(0.0, 0.0, 200.0, 200.0));
        // 90° in math convention is the top of the dial → smaller y.
        let top = geom.point_at(90.0, 50.0);
        assert!((top.x - 100.0).abs() < 1e-3);
        assert!((top.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn square_size_is_min_axis_minus_padding() {
        let pad = Edges::symmetric(10.0, 20.0);
        // width axis: 300 - 40 = 260; height axis: 280 - 20 = 260.
        assert_eq!(square_size(Vec2::new(300.0, 280.0), pad), 260.0);
        // Asymmetric: the tighter axis wins.
        assert_eq!(square_size(Vec2::new(500.0, 100.0), pad), 80.0);
        assert_eq!(square_size(Vec2::new(100.0, 500.0), pad), 60.0);
    }

    #[test]
    fn square_size_never_negative() {
        assert_eq!(square_size(Vec2::new(5.0, 5.0), Edges::all(10.0)), 0.0);
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn tick_emphasis_rule_over_all_sixty() {
        for i in 0..60u32 {
            let deg = i * TICK_STEP_DEG;
            let expected = deg % 90 == 0 || deg % 15 == 0;
            assert_eq!(tick_is_emphasized(deg), expected, "deg {deg}");
        }
        // On the 6° grid the emphasized set is exactly the hour positions.
        let emphasized: Vec<u32> = (0..60u32)
            .map(|i| i * TICK_STEP_DEG)
            .filter(|&d| tick_is_emphasized(d))
            .collect();
        assert_eq!(emphasized, (0..12u32).map(|h| h * 30).collect::<Vec<_>>());
    }

    #[test]
    fn tick_points_inward_from_rim() {
        let geom = FaceGeometry::from_rect(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        let (outer, inner) = tick_line(geom, 0);
        // deg 0 is due right: both endpoints on the horizontal through center.
        assert!((outer.y - 500.0).abs() < 1e-3);
        assert!((inner.y - 500.0).abs() < 1e-3);
        assert!((outer.x - (500.0 + 490.0)).abs() < 1e-3);
        assert!((inner.x - (500.0 + 450.0)).abs() < 1e-3);
    }

    // ── hour numerals ─────────────────────────────────────────────────────

    #[test]
    fn hour_labels_are_a_bijection_onto_one_through_twelve() {
        let labels: BTreeSet<u32> = (0..12u32).map(|s| hour_label(s * 30)).collect();
        assert_eq!(labels, (1..=12u32).collect::<BTreeSet<_>>());
    }

    #[test]
    fn cardinal_slots_read_the_right_hours() {
        assert_eq!(hour_label(90), 12); // top
        assert_eq!(hour_label(0), 3); // right
        assert_eq!(hour_label(270), 6); // bottom
        assert_eq!(hour_label(180), 9); // left
    }

    #[test]
    fn numeral_sits_inside_the_tick_ring() {
        let geom = FaceGeometry::from_rect(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        let pos = numeral_center(geom, 90, 80.0);
        // top slot: x at center, y = cy - (r - 0.05w - inset).
        assert!((pos.x - 500.0).abs() < 1e-3);
        assert!((pos.y - (500.0 - 370.0)).abs() < 1e-3);
    }

    // ── needles ───────────────────────────────────────────────────────────

    #[test]
    fn needles_point_up_at_twelve_o_clock() {
        let s = sample(12, 0, 0, Meridiem::Am);
        let center = Vec2::new(100.0, 100.0);

        for angle in [hour_angle_deg(s), minute_angle_deg(s), second_angle_deg(s)] {
            let tip = needle_tip(center, angle, 50.0);
            assert!((tip.x - 100.0).abs() < 1e-3, "angle {angle}");
            assert!((tip.y - 50.0).abs() < 1e-3, "angle {angle}");
        }
    }

    #[test]
    fn second_needle_points_right_at_fifteen_seconds() {
        let s = sample(12, 0, 15, Meridiem::Am);
        let tip = needle_tip(Vec2::new(0.0, 0.0), second_angle_deg(s), 10.0);
        assert!((tip.x - 10.0).abs() < 1e-3);
        assert!(tip.y.abs() < 1e-3);
    }

    #[test]
    fn hour_needle_creeps_with_minutes() {
        let on_the_hour = hour_angle_deg(sample(3, 0, 0, Meridiem::Pm));
        let half_past = hour_angle_deg(sample(3, 30, 0, Meridiem::Pm));
        // Half an hour moves the hour needle half a numeral step (15°).
        assert!((on_the_hour - half_past - 15.0).abs() < 1e-3);
    }

    #[test]
    fn minute_needle_is_continuous_across_minute_rollover() {
        // Sample consecutive seconds over two full minutes; every step must
        // be the same 0.1° fractional carry, including 59 → 0.
        let mut prev = minute_angle_deg(sample(9, 5, 0, Meridiem::Am));
        for tick in 1..=120u32 {
            let minute = 5 + tick / 60;
            let second = tick % 60;
            let next = minute_angle_deg(sample(9, minute, second, Meridiem::Am));
            let delta = prev - next;
            assert!(
                (delta - 360.0 / 3600.0).abs() < 1e-3,
                "jump of {delta}° at minute {minute} second {second}"
            );
            prev = next;
        }
    }

    // ── digital label ─────────────────────────────────────────────────────

    #[test]
    fn digital_label_zero_pads_and_appends_meridiem() {
        assert_eq!(digital_label(sample(9, 5, 3, Meridiem::Pm)), "09:05:03PM");
        assert_eq!(digital_label(sample(11, 59, 59, Meridiem::Pm)), "11:59:59PM");
    }

    #[test]
    fn noon_and_midnight_display_hour_zero() {
        assert_eq!(digital_label(sample(12, 0, 0, Meridiem::Pm)), "00:00:00PM");
        assert_eq!(digital_label(sample(12, 0, 0, Meridiem::Am)), "00:00:00AM");
    }
}
