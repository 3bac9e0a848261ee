//! Error type for nightly report computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use vesper_ephem::{Body, Direction, EphemerisError};
use vesper_time::TimeError;

/// Errors that abort a nightly report.
///
/// A report is all-or-nothing: any failure here means no events were
/// emitted for the requested date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// The requested calendar date could not be converted to a time
    /// origin.
    Time(TimeError),
    /// Sun or Moon does not cross its horizon on the requested date.
    Circumpolar { body: Body, direction: Direction },
}

impl ReportError {
    /// Attach the queried body to a provider circumpolar failure.
    pub(crate) fn circumpolar(body: Body, e: EphemerisError) -> Self {
        match e {
            EphemerisError::Circumpolar(direction) => Self::Circumpolar { body, direction },
        }
    }
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Circumpolar { body, direction } => {
                write!(f, "{body} is circumpolar: remains {direction} the horizon all day")
            }
        }
    }
}

impl Error for ReportError {}

impl From<TimeError> for ReportError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
