//! Calendar-field projections of a Julian date.
//!
//! A single event instant is stored as a UTC Julian date and projected
//! once into calendar fields, in UT and in one fixed local offset. The
//! projections are derived values and are never converted back.

use crate::julian::{SECONDS_PER_DAY, jd_to_calendar};

/// A UTC calendar date, the input to a nightly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A fixed whole-second offset from UT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOffset {
    seconds: i32,
}

impl ZoneOffset {
    /// The UT zone itself (offset zero).
    pub const UTC: ZoneOffset = ZoneOffset { seconds: 0 };

    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub const fn from_hours(hours: i32) -> Self {
        Self::from_seconds(hours * 3600)
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Signed two-digit hour suffix for display: `+00`, `-07`.
    pub fn suffix(&self) -> String {
        format!("{:+03}", self.seconds / 3600)
    }
}

/// Calendar date and time-of-day fields with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl DateTimeFields {
    /// Project a UTC Julian date into calendar fields in the given zone.
    ///
    /// `second` is left unrounded: an instant a few tens of
    /// microseconds before a minute boundary keeps `second` just
    /// under 60, which the four-decimal display rounds to `60.0000`
    /// without carrying into the minute.
    pub fn from_jd(jd: f64, zone: ZoneOffset) -> Self {
        let shifted = jd + zone.seconds() as f64 / SECONDS_PER_DAY;
        let (year, month, day_frac) = jd_to_calendar(shifted);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for DateTimeFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:07.4}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::jd_midnight;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ut_projection_of_midnight() {
        let jd = jd_midnight(2024, 3, 20).unwrap();
        let f = DateTimeFields::from_jd(jd, ZoneOffset::UTC);
        assert_eq!((f.year, f.month, f.day), (2024, 3, 20));
        assert_eq!((f.hour, f.minute), (0, 0));
        assert_abs_diff_eq!(f.second, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn local_projection_crosses_midnight() {
        // 03:30 UT on the 20th is 20:30 on the 19th at UT-7.
        let jd = jd_midnight(2024, 3, 20).unwrap() + 3.5 / 24.0;
        let f = DateTimeFields::from_jd(jd, ZoneOffset::from_hours(-7));
        assert_eq!((f.year, f.month, f.day), (2024, 3, 19));
        assert_eq!((f.hour, f.minute), (20, 30));
    }

    #[test]
    fn zone_projection_equals_shifted_ut_projection() {
        // Projecting through a zone must agree with projecting the
        // shifted instant through UT; the zone never does its own
        // calendar arithmetic.
        let jd = jd_midnight(2024, 7, 4).unwrap() + 11.0 / 24.0 + 42.25 / SECONDS_PER_DAY;
        let via_zone = DateTimeFields::from_jd(jd, ZoneOffset::from_hours(-7));
        let via_shift = DateTimeFields::from_jd(jd - 7.0 / 24.0, ZoneOffset::UTC);
        assert_eq!(
            (via_zone.year, via_zone.month, via_zone.day, via_zone.hour, via_zone.minute),
            (via_shift.year, via_shift.month, via_shift.day, via_shift.hour, via_shift.minute)
        );
        assert_abs_diff_eq!(via_zone.second, via_shift.second, epsilon = 1e-4);
    }

    #[test]
    fn display_rounds_second_to_sixty_at_minute_boundary() {
        // Sub-resolution instants just before a minute boundary show
        // a second field of 60.0000; the minute does not carry.
        let f = DateTimeFields {
            year: 2024,
            month: 3,
            day: 20,
            hour: 1,
            minute: 59,
            second: 59.999_96,
        };
        assert_eq!(f.to_string(), "2024-03-20 01:59:60.0000");
    }

    #[test]
    fn offsets_from_seconds_and_hours_agree() {
        assert_eq!(ZoneOffset::from_seconds(-7 * 3600), ZoneOffset::from_hours(-7));
        assert_eq!(ZoneOffset::from_seconds(-7 * 3600).seconds(), -25_200);
    }

    #[test]
    fn zone_suffixes() {
        assert_eq!(ZoneOffset::UTC.suffix(), "+00");
        assert_eq!(ZoneOffset::from_hours(-7).suffix(), "-07");
        assert_eq!(ZoneOffset::from_hours(5).suffix(), "+05");
    }

    #[test]
    fn display_pads_fields() {
        let f = DateTimeFields {
            year: 2024,
            month: 3,
            day: 5,
            hour: 1,
            minute: 9,
            second: 7.1234,
        };
        assert_eq!(f.to_string(), "2024-03-05 01:09:07.1234");
    }
}
