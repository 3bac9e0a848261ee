//! The shipped [`Ephemeris`] implementation.

use crate::error::EphemerisError;
use crate::position;
use crate::provider::Ephemeris;
use crate::riseset::compute_crossings;
use crate::types::{Observer, RiseSet};

/// Standard lunar rise/set horizon in degrees: a flat compromise
/// for refraction, semidiameter, and parallax.
pub const LUNAR_STANDARD_HORIZON_DEG: f64 = 0.125;

/// Ephemeris provider backed by the `astro` crate position series.
///
/// Stateless; all queries are pure functions of their arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstroEphemeris;

impl AstroEphemeris {
    pub fn new() -> Self {
        Self
    }
}

impl Ephemeris for AstroEphemeris {
    fn sun_crossings(
        &self,
        jd_0h_ut: f64,
        observer: &Observer,
        horizon_deg: f64,
    ) -> Result<RiseSet, EphemerisError> {
        compute_crossings(&position::sun_equatorial, jd_0h_ut, observer, horizon_deg)
    }

    fn moon_crossings(
        &self,
        jd_0h_ut: f64,
        observer: &Observer,
    ) -> Result<RiseSet, EphemerisError> {
        compute_crossings(
            &position::moon_equatorial,
            jd_0h_ut,
            observer,
            LUNAR_STANDARD_HORIZON_DEG,
        )
    }

    fn moon_altitude_deg(&self, jd: f64, observer: &Observer) -> f64 {
        let (ra, dec) = position::moon_equatorial(jd);
        position::altitude_deg(jd, observer, ra, dec)
    }

    fn moon_illuminated_fraction(&self, jd: f64) -> f64 {
        position::illuminated_fraction(jd)
    }
}
