use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// Wall-clock source for the widget.
///
/// Production code injects [`SystemClock`]; tests inject a fixed instant.
pub trait WallClock {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock reading the host's real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The face's default display zone: UTC+8.
///
/// The display zone is a fixed offset, never the device locale; hosts
/// wanting another zone set it explicitly through the clock style.
#[must_use]
pub fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid fixed offset")
}

/// Half of the day for 12-hour display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Hour/minute/second snapshot in a fixed-offset zone, 12-hour form.
///
/// Transient: sampled fresh at every render, never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    /// Hour in `1..=12`. The digital label folds this into the half-day
    /// count `0..=11`, so noon and midnight print as hour `00`.
    pub hour12: u32,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Meridiem,
}

impl TimeSample {
    /// Projects a UTC instant into `offset` and splits it into 12-hour fields.
    #[must_use]
    pub fn at(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        let local = instant.with_timezone(&offset);
        let (is_pm, hour12) = local.hour12();
        Self {
            hour12,
            minute: local.minute(),
            second: local.second(),
            meridiem: if is_pm { Meridiem::Pm } else { Meridiem::Am },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn sample_shifts_into_plus_eight() {
        let sample = TimeSample::at(utc(1, 5, 3), default_offset());
        assert_eq!(sample.hour12, 9);
        assert_eq!(sample.minute, 5);
        assert_eq!(sample.second, 3);
        assert_eq!(sample.meridiem, Meridiem::Am);
    }

    #[test]
    fn afternoon_is_pm() {
        // 13:05:03 UTC = 21:05:03 at +8.
        let sample = TimeSample::at(utc(13, 5, 3), default_offset());
        assert_eq!(sample.hour12, 9);
        assert_eq!(sample.meridiem, Meridiem::Pm);
    }

    #[test]
    fn midnight_and_noon_read_twelve() {
        // 16:00 UTC = 00:00 at +8; 04:00 UTC = 12:00 at +8.
        let midnight = TimeSample::at(utc(16, 0, 0), default_offset());
        assert_eq!(midnight.hour12, 12);
        assert_eq!(midnight.meridiem, Meridiem::Am);

        let noon = TimeSample::at(utc(4, 0, 0), default_offset());
        assert_eq!(noon.hour12, 12);
        assert_eq!(noon.meridiem, Meridiem::Pm);
    }

    #[test]
    fn custom_offset_is_honored() {
        let utc_zone = FixedOffset::east_opt(0).unwrap();
        let sample = TimeSample::at(utc(1, 5, 3), utc_zone);
        assert_eq!(sample.hour12, 1);
        assert_eq!(sample.meridiem, Meridiem::Am);
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock::new();
        assert!(clock.now().timestamp() > 0);
    }
}
