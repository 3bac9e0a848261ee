//! Moon Rise and Moon Set over the lunar horizon.

use vesper_ephem::{Body, Ephemeris, Observer};
use vesper_time::{CalendarDate, ZoneOffset, jd_midnight};

use crate::error::ReportError;
use crate::event::{Event, EventKind};

/// Computes the pair of Moon events for one UT date.
#[derive(Debug, Clone, Copy)]
pub struct MoonCalculator {
    observer: Observer,
    local_zone: ZoneOffset,
}

impl MoonCalculator {
    pub fn new(observer: Observer, local_zone: ZoneOffset) -> Self {
        Self {
            observer,
            local_zone,
        }
    }

    /// (Moon Rise, Moon Set) for the UT date, or a fatal error.
    ///
    /// Each event carries the illuminated fraction at its own instant,
    /// unsigned: the event is itself the horizon crossing, so no
    /// visibility sign applies. A circumpolar Moon fails the date.
    pub fn events<E: Ephemeris>(
        &self,
        provider: &E,
        date: CalendarDate,
    ) -> Result<(Event, Event), ReportError> {
        let jd_0h = jd_midnight(date.year, date.month, date.day)?;

        let crossing = provider
            .moon_crossings(jd_0h, &self.observer)
            .map_err(|e| ReportError::circumpolar(Body::Moon, e))?;

        let rise = Event::at(
            EventKind::MoonRise,
            crossing.rise_jd,
            self.local_zone,
            provider.moon_illuminated_fraction(crossing.rise_jd),
            None,
        );
        let set = Event::at(
            EventKind::MoonSet,
            crossing.set_jd,
            self.local_zone,
            provider.moon_illuminated_fraction(crossing.set_jd),
            None,
        );

        Ok((rise, set))
    }
}
