//! Error type for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::types::Direction;

/// Errors from rise/set queries.
///
/// A circumpolar condition is a deterministic function of date and
/// location, not a transient fault; callers are expected to fail fast
/// rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisError {
    /// The body never crosses the requested horizon on the given day.
    Circumpolar(Direction),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circumpolar(dir) => {
                write!(f, "circumpolar: body stays {dir} the horizon all day")
            }
        }
    }
}

impl Error for EphemerisError {}
