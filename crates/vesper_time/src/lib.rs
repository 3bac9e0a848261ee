//! Calendar and Julian-date support for the vesper night report.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Calendar-field projections of an instant in UT or a fixed offset
//! - The `TimeError` type for invalid calendar input

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{CalendarDate, DateTimeFields, ZoneOffset};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, jd_from_calendar, jd_midnight, jd_to_calendar};
