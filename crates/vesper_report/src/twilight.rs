//! The twilight window: Sun Set and Sun Rise at the observing-night
//! horizon depressions, annotated with lunar visibility.

use vesper_ephem::{Body, Ephemeris, Observer};
use vesper_time::{CalendarDate, ZoneOffset, jd_midnight};

use crate::error::ReportError;
use crate::event::{Event, EventKind};

/// Horizon altitudes bounding the observing night, in degrees.
///
/// The two sides differ: the night begins once the Sun is 16.5 deg
/// down but ends already at 15 deg. Both are configuration, not
/// physics; the defaults are the observatory's definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwilightThresholds {
    /// Sunset-side horizon altitude (start of night).
    pub sunset_horizon_deg: f64,
    /// Sunrise-side horizon altitude (end of night).
    pub sunrise_horizon_deg: f64,
}

impl Default for TwilightThresholds {
    fn default() -> Self {
        Self {
            sunset_horizon_deg: -16.5,
            sunrise_horizon_deg: -15.0,
        }
    }
}

/// Computes the pair of Sun events bounding one observing night.
#[derive(Debug, Clone, Copy)]
pub struct TwilightCalculator {
    observer: Observer,
    thresholds: TwilightThresholds,
    local_zone: ZoneOffset,
}

impl TwilightCalculator {
    pub fn new(observer: Observer, thresholds: TwilightThresholds, local_zone: ZoneOffset) -> Self {
        Self {
            observer,
            thresholds,
            local_zone,
        }
    }

    /// (Sun Set, Sun Rise) for the UT date, or a fatal error.
    ///
    /// Two separate provider queries are required because the horizon
    /// depression differs between the start and end of the night. A
    /// circumpolar Sun on either side fails the whole date.
    pub fn events<E: Ephemeris>(
        &self,
        provider: &E,
        date: CalendarDate,
    ) -> Result<(Event, Event), ReportError> {
        let jd_0h = jd_midnight(date.year, date.month, date.day)?;

        let evening = provider
            .sun_crossings(jd_0h, &self.observer, self.thresholds.sunset_horizon_deg)
            .map_err(|e| ReportError::circumpolar(Body::Sun, e))?;
        let sun_set = self.sun_event(provider, EventKind::SunSet, evening.set_jd);

        let morning = provider
            .sun_crossings(jd_0h, &self.observer, self.thresholds.sunrise_horizon_deg)
            .map_err(|e| ReportError::circumpolar(Body::Sun, e))?;
        let sun_rise = self.sun_event(provider, EventKind::SunRise, morning.rise_jd);

        Ok((sun_set, sun_rise))
    }

    fn sun_event<E: Ephemeris>(&self, provider: &E, kind: EventKind, jd: f64) -> Event {
        let altitude = provider.moon_altitude_deg(jd, &self.observer);
        let fraction = provider.moon_illuminated_fraction(jd);
        // Historical boundary asymmetry, kept bit-exact: the set side
        // counts the Moon as visible only strictly above the horizon,
        // the rise side includes the horizon itself.
        let visible = match kind {
            EventKind::SunSet => altitude > 0.0,
            _ => altitude >= 0.0,
        };
        let illumination = if visible { fraction } else { -fraction };
        Event::at(kind, jd, self.local_zone, illumination, Some(altitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_ephem::{Direction, EphemerisError, RiseSet};

    const OBSERVER: Observer = Observer::new(31.675, -110.952);
    const MST: ZoneOffset = ZoneOffset::from_hours(-7);
    const JD_0H: f64 = 2_460_389.5; // 2024-03-20

    /// Scripted provider: fixed crossing times, moon altitude chosen
    /// per queried instant.
    struct Scripted {
        sun: Result<RiseSet, EphemerisError>,
        moon_alt_at_set: f64,
        moon_alt_at_rise: f64,
        fraction: f64,
    }

    impl Scripted {
        fn with_altitudes(at_set: f64, at_rise: f64) -> Self {
            Self {
                sun: Ok(RiseSet {
                    rise_jd: JD_0H + 0.55,
                    set_jd: JD_0H + 0.08,
                }),
                moon_alt_at_set: at_set,
                moon_alt_at_rise: at_rise,
                fraction: 0.4321,
            }
        }
    }

    impl Ephemeris for Scripted {
        fn sun_crossings(
            &self,
            _jd: f64,
            _observer: &Observer,
            _horizon_deg: f64,
        ) -> Result<RiseSet, EphemerisError> {
            self.sun
        }

        fn moon_crossings(
            &self,
            _jd: f64,
            _observer: &Observer,
        ) -> Result<RiseSet, EphemerisError> {
            unimplemented!("not used by the twilight calculator")
        }

        fn moon_altitude_deg(&self, jd: f64, _observer: &Observer) -> f64 {
            if (jd - (JD_0H + 0.08)).abs() < 1e-9 {
                self.moon_alt_at_set
            } else {
                self.moon_alt_at_rise
            }
        }

        fn moon_illuminated_fraction(&self, _jd: f64) -> f64 {
            self.fraction
        }
    }

    fn calculator() -> TwilightCalculator {
        TwilightCalculator::new(OBSERVER, TwilightThresholds::default(), MST)
    }

    #[test]
    fn moon_up_gives_positive_illumination() {
        let provider = Scripted::with_altitudes(25.0, 25.0);
        let (set, rise) = calculator()
            .events(&provider, CalendarDate::new(2024, 3, 20))
            .unwrap();
        assert!(set.moon_illumination > 0.0);
        assert!(rise.moon_illumination > 0.0);
        assert_eq!(set.moon_altitude_deg, Some(25.0));
    }

    #[test]
    fn moon_down_flips_the_sign_but_keeps_the_magnitude() {
        let provider = Scripted::with_altitudes(-10.0, -10.0);
        let (set, rise) = calculator()
            .events(&provider, CalendarDate::new(2024, 3, 20))
            .unwrap();
        assert_eq!(set.moon_illumination, -0.4321);
        assert_eq!(rise.moon_illumination, -0.4321);
    }

    #[test]
    fn horizon_boundary_differs_between_sides() {
        // Moon altitude exactly 0 at both instants: invisible at Sun
        // Set (> 0), visible at Sun Rise (>= 0).
        let provider = Scripted::with_altitudes(0.0, 0.0);
        let (set, rise) = calculator()
            .events(&provider, CalendarDate::new(2024, 3, 20))
            .unwrap();
        assert!(set.moon_illumination < 0.0);
        assert!(rise.moon_illumination > 0.0);
    }

    #[test]
    fn circumpolar_sun_is_fatal_and_names_the_sun() {
        let mut provider = Scripted::with_altitudes(0.0, 0.0);
        provider.sun = Err(EphemerisError::Circumpolar(Direction::AlwaysBelow));
        let err = calculator()
            .events(&provider, CalendarDate::new(2024, 3, 20))
            .unwrap_err();
        assert_eq!(err, ReportError::Circumpolar {
            body: Body::Sun,
            direction: Direction::AlwaysBelow
        });
    }

    #[test]
    fn invalid_date_is_rejected_before_any_query() {
        let provider = Scripted::with_altitudes(0.0, 0.0);
        let err = calculator()
            .events(&provider, CalendarDate::new(2024, 13, 1))
            .unwrap_err();
        assert!(matches!(err, ReportError::Time(_)));
    }

    #[test]
    fn set_uses_begin_threshold_and_rise_uses_end() {
        // Events come from different queries: Sun Set is the set time
        // of the deeper crossing, Sun Rise the rise time of the
        // shallower one.
        let provider = Scripted::with_altitudes(5.0, 5.0);
        let (set, rise) = calculator()
            .events(&provider, CalendarDate::new(2024, 3, 20))
            .unwrap();
        assert!(set.jd < rise.jd);
        assert_eq!(set.kind, EventKind::SunSet);
        assert_eq!(rise.kind, EventKind::SunRise);
    }
}
