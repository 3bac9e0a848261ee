//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Standard algorithms from spherical astronomy references (Meeus ch. 7).
//! All Julian dates here are on the UTC scale; no leap-second or TT/TDB
//! handling is attempted, which matches the accuracy class of the report
//! this workspace produces.

use crate::error::TimeError;

/// Julian date of the J2000.0 epoch (2000-Jan-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date from a Gregorian calendar date with fractional day.
///
/// `day_frac` carries the time of day (e.g. 20.5 = the 20th at 12:00 UT).
/// Field ranges are validated coarsely (month 1-12, day 1-31); deeper
/// calendar validity (e.g. Feb 31) is deliberately not checked.
pub fn jd_from_calendar(year: i32, month: u32, day_frac: f64) -> Result<f64, TimeError> {
    let day = day_frac.floor() as u32;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(TimeError::InvalidDate { year, month, day });
    }

    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jd = (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day_frac
        + b
        - 1524.5;
    Ok(jd)
}

/// Julian date of 0h UT on a Gregorian calendar date.
pub fn jd_midnight(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    jd_from_calendar(year, month, day as f64)
}

/// Gregorian calendar date (year, month, fractional day) from a Julian date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    (year, month, day_frac)
}
