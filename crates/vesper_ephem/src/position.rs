//! Geocentric solar/lunar positions and derived quantities.
//!
//! Thin layer over the `astro` crate's position series: equatorial
//! coordinates from the geocentric ecliptic ones, Greenwich mean
//! sidereal time, horizontal altitude, and the lunar illuminated
//! fraction (Meeus ch. 48 phase-angle formula).

use std::f64::consts::{PI, TAU};

use astro::angle::limit_to_two_PI;
use astro::coords::{alt_frm_eq, asc_frm_ecl, dec_frm_ecl};
use astro::ecliptic::mn_oblq_IAU;
use astro::time::mn_sidr;

use crate::types::Observer;

/// Astronomical unit in kilometers.
const AU_KM: f64 = 1.495_978_707e8;

/// Sidereal turning rate in radians per UT day.
pub(crate) const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * 1.002_737_811_911_354_6;

/// Greenwich mean sidereal time at a UTC Julian date, in radians.
///
/// Evaluated at 0h UT of the day and advanced by the elapsed day
/// fraction at the sidereal rate (the same formulation guards against
/// 0h-only sidereal series).
pub fn gmst_rad(jd: f64) -> f64 {
    let jd_0h = (jd - 0.5).floor() + 0.5;
    let elapsed_days = jd - jd_0h;
    limit_to_two_PI(mn_sidr(jd_0h) + elapsed_days * SIDEREAL_RATE_RAD_PER_DAY)
}

/// Geocentric equatorial (RA, Dec) of the Sun, in radians.
pub fn sun_equatorial(jd: f64) -> (f64, f64) {
    let (ecl, _rad_vec_au) = astro::sun::geocent_ecl_pos(jd);
    let oblq = mn_oblq_IAU(jd);
    (
        limit_to_two_PI(asc_frm_ecl(ecl.long, ecl.lat, oblq)),
        dec_frm_ecl(ecl.long, ecl.lat, oblq),
    )
}

/// Geocentric equatorial (RA, Dec) of the Moon, in radians.
pub fn moon_equatorial(jd: f64) -> (f64, f64) {
    let (ecl, _dist_km) = astro::lunar::geocent_ecl_pos(jd);
    let oblq = mn_oblq_IAU(jd);
    (
        limit_to_two_PI(asc_frm_ecl(ecl.long, ecl.lat, oblq)),
        dec_frm_ecl(ecl.long, ecl.lat, oblq),
    )
}

/// Local hour angle of a body, in radians, normalized to [-pi, pi].
///
/// `astro::coords::hr_angl_frm_observer_long` gets the sign wrong;
/// the correct relation is GMST + east longitude - RA.
pub fn hour_angle(jd: f64, observer: &Observer, ra: f64) -> f64 {
    normalize_pm_pi(gmst_rad(jd) + observer.longitude_rad() - ra)
}

/// Altitude of a body above the horizon, in degrees.
pub fn altitude_deg(jd: f64, observer: &Observer, ra: f64, dec: f64) -> f64 {
    let ha = hour_angle(jd, observer, ra);
    alt_frm_eq(ha, dec, observer.latitude_rad()).to_degrees()
}

/// Illuminated fraction of the Moon's disk at `jd`, in [0, 1].
///
/// Geocentric elongation from the ecliptic positions, then the phase
/// angle from the triangle Sun-Moon-Earth, then k = (1 + cos i) / 2.
pub fn illuminated_fraction(jd: f64) -> f64 {
    let (sun_ecl, sun_rad_vec_au) = astro::sun::geocent_ecl_pos(jd);
    let (moon_ecl, moon_dist_km) = astro::lunar::geocent_ecl_pos(jd);
    let sun_dist_km = sun_rad_vec_au * AU_KM;

    let cos_elong = moon_ecl.lat.cos() * (moon_ecl.long - sun_ecl.long).cos();
    let elong = cos_elong.acos();
    let phase_angle = (sun_dist_km * elong.sin()).atan2(moon_dist_km - sun_dist_km * cos_elong);

    ((1.0 + phase_angle.cos()) / 2.0).clamp(0.0, 1.0)
}

/// Normalize an angle to [-pi, pi].
pub(crate) fn normalize_pm_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}
