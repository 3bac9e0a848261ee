//! The ephemeris provider contract consumed by the report calculators.

use crate::error::EphemerisError;
use crate::types::{Observer, RiseSet};

/// Solar/lunar ephemeris queries for one observer and one UT day.
///
/// Times are UTC Julian dates. `jd_0h_ut` is the Julian date of 0h UT
/// on the calendar day of interest; crossing times are reported within
/// that UT day.
pub trait Ephemeris {
    /// Times at which the Sun's altitude crosses `horizon_deg`
    /// (negative values are depressions below the geometric horizon).
    fn sun_crossings(
        &self,
        jd_0h_ut: f64,
        observer: &Observer,
        horizon_deg: f64,
    ) -> Result<RiseSet, EphemerisError>;

    /// Moonrise and moonset over the standard lunar horizon. The
    /// horizon is fixed by the provider; there is no depression
    /// parameter for the Moon.
    fn moon_crossings(&self, jd_0h_ut: f64, observer: &Observer)
    -> Result<RiseSet, EphemerisError>;

    /// The Moon's altitude above the horizon at `jd`, in degrees.
    fn moon_altitude_deg(&self, jd: f64, observer: &Observer) -> f64;

    /// Illuminated fraction of the Moon's disk at `jd`, in [0, 1].
    fn moon_illuminated_fraction(&self, jd: f64) -> f64;
}
