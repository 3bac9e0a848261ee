//! Iterative horizon-crossing solver.
//!
//! Hour-angle scheme from standard spherical astronomy (Meeus, USNO,
//! Montenbruck & Pfleger): start from the transit nearest local noon,
//! offset by the semi-diurnal arc for the target altitude, fold the
//! estimates into the requested UT day, then refine by correcting the
//! hour angle at the sidereal rate. The position series is re-queried
//! at each step, so the scheme also converges for the fast-moving
//! Moon.

use crate::error::EphemerisError;
use crate::position::{SIDEREAL_RATE_RAD_PER_DAY, gmst_rad, normalize_pm_pi};
use crate::types::{Direction, Observer, RiseSet};

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 8;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Both horizon crossings of a body within the UT day at `jd_0h_ut`.
///
/// `position` returns the geocentric (RA, Dec) in radians at a UTC
/// Julian date. `h0_deg` is the altitude of the crossing (negative =
/// depression below the geometric horizon).
pub fn compute_crossings<F>(
    position: &F,
    jd_0h_ut: f64,
    observer: &Observer,
    h0_deg: f64,
) -> Result<RiseSet, EphemerisError>
where
    F: Fn(f64) -> (f64, f64),
{
    let phi = observer.latitude_rad();
    let h0 = h0_deg.to_radians();
    let jd_mid = jd_0h_ut + 0.5;

    let (ra, dec) = position(jd_mid);
    let semi = semi_diurnal_arc(h0, dec, phi)?;

    // Transit nearest UT noon: correct for the hour angle there.
    let ha_mid = normalize_pm_pi(gmst_rad(jd_mid) + observer.longitude_rad() - ra);
    let jd_transit = jd_mid - ha_mid / SIDEREAL_RATE_RAD_PER_DAY;

    let rise_jd = refine(
        position,
        jd_0h_ut,
        observer,
        h0,
        jd_transit - semi / SIDEREAL_RATE_RAD_PER_DAY,
        true,
    )?;
    let set_jd = refine(
        position,
        jd_0h_ut,
        observer,
        h0,
        jd_transit + semi / SIDEREAL_RATE_RAD_PER_DAY,
        false,
    )?;

    Ok(RiseSet { rise_jd, set_jd })
}

/// Refine one crossing estimate down to [`CONVERGENCE_DAYS`].
fn refine<F>(
    position: &F,
    jd_0h_ut: f64,
    observer: &Observer,
    h0: f64,
    estimate: f64,
    rising: bool,
) -> Result<f64, EphemerisError>
where
    F: Fn(f64) -> (f64, f64),
{
    // Fold the estimate into the UT day of interest; each crossing is
    // reported independently within that day.
    let mut jd = jd_0h_ut + (estimate - jd_0h_ut).rem_euclid(1.0);
    let phi = observer.latitude_rad();

    for _ in 0..MAX_ITERATIONS {
        let (ra, dec) = position(jd);
        let semi = semi_diurnal_arc(h0, dec, phi)?;
        let ha_target = if rising { -semi } else { semi };
        let ha_actual = normalize_pm_pi(gmst_rad(jd) + observer.longitude_rad() - ra);

        let correction = normalize_pm_pi(ha_target - ha_actual) / SIDEREAL_RATE_RAD_PER_DAY;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(jd)
}

/// Hour angle of the crossing altitude, in radians (always positive).
///
/// `cos H0` outside [-1, 1] means the body never reaches the target
/// altitude (stays below) or never drops to it (stays above).
fn semi_diurnal_arc(h0: f64, dec: f64, phi: f64) -> Result<f64, EphemerisError> {
    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Err(EphemerisError::Circumpolar(Direction::AlwaysBelow));
    }
    if cos_h0 < -1.0 {
        return Err(EphemerisError::Circumpolar(Direction::AlwaysAbove));
    }
    Ok(cos_h0.acos())
}
