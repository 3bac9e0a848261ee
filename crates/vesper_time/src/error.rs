//! Error type for calendar/Julian-date conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields outside the accepted ranges (month 1-12, day 1-31).
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}
