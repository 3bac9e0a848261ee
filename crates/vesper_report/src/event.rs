//! The event model: four annotated horizon crossings per night.

use vesper_time::{DateTimeFields, ZoneOffset};

/// The four occurrences a nightly report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SunSet,
    SunRise,
    MoonRise,
    MoonSet,
}

impl EventKind {
    /// Display label, at most nine characters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SunSet => "Sun Set",
            Self::SunRise => "Sun Rise",
            Self::MoonRise => "Moon Rise",
            Self::MoonSet => "Moon Set",
        }
    }
}

/// One computed occurrence, read-only after construction.
///
/// `jd` is the sole sort key. The UT and local calendar projections
/// are derived from it once, never recomputed.
///
/// `moon_illumination` is signed for Sun events: the magnitude is the
/// Moon's illuminated fraction at the instant, the sign records
/// whether the Moon was up (negative = not visible). Moon events carry
/// the plain non-negative fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub jd: f64,
    pub ut: DateTimeFields,
    pub local: DateTimeFields,
    pub moon_illumination: f64,
    /// Moon altitude in degrees; populated for Sun events only.
    pub moon_altitude_deg: Option<f64>,
}

impl Event {
    pub(crate) fn at(
        kind: EventKind,
        jd: f64,
        local_zone: ZoneOffset,
        moon_illumination: f64,
        moon_altitude_deg: Option<f64>,
    ) -> Self {
        Self {
            kind,
            jd,
            ut: DateTimeFields::from_jd(jd, ZoneOffset::UTC),
            local: DateTimeFields::from_jd(jd, local_zone),
            moon_illumination,
            moon_altitude_deg,
        }
    }
}

/// The complete set of one night's four events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSet {
    pub sun_set: Event,
    pub sun_rise: Event,
    pub moon_rise: Event,
    pub moon_set: Event,
}

impl EventSet {
    /// Events ascending by instant. The sort is stable and total
    /// (`f64::total_cmp`); equal instants keep fixed-column order.
    pub fn chronological(&self) -> [&Event; 4] {
        let mut ordered = self.fixed_order();
        ordered.sort_by(|a, b| a.jd.total_cmp(&b.jd));
        ordered
    }

    /// Fixed column order for CSV output: Sun Set, Sun Rise, Moon Set,
    /// Moon Rise, regardless of chronology.
    pub fn fixed_order(&self) -> [&Event; 4] {
        [&self.sun_set, &self.sun_rise, &self.moon_set, &self.moon_rise]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: EventKind, jd: f64) -> Event {
        Event::at(kind, jd, ZoneOffset::from_hours(-7), 0.5, None)
    }

    #[test]
    fn labels_fit_the_nine_char_field() {
        for kind in [
            EventKind::SunSet,
            EventKind::SunRise,
            EventKind::MoonRise,
            EventKind::MoonSet,
        ] {
            assert!(kind.label().len() <= 9);
        }
    }

    #[test]
    fn chronological_sorts_by_instant() {
        let set = EventSet {
            sun_set: event(EventKind::SunSet, 2_460_389.6),
            sun_rise: event(EventKind::SunRise, 2_460_390.05),
            moon_rise: event(EventKind::MoonRise, 2_460_389.9),
            moon_set: event(EventKind::MoonSet, 2_460_389.55),
        };
        let kinds: Vec<EventKind> = set.chronological().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![
            EventKind::MoonSet,
            EventKind::SunSet,
            EventKind::MoonRise,
            EventKind::SunRise
        ]);
    }

    #[test]
    fn chronological_is_deterministic() {
        let set = EventSet {
            sun_set: event(EventKind::SunSet, 2_460_389.6),
            sun_rise: event(EventKind::SunRise, 2_460_389.6),
            moon_rise: event(EventKind::MoonRise, 2_460_389.6),
            moon_set: event(EventKind::MoonSet, 2_460_389.6),
        };
        let first: Vec<EventKind> = set.chronological().iter().map(|e| e.kind).collect();
        let second: Vec<EventKind> = set.chronological().iter().map(|e| e.kind).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_order_ignores_chronology() {
        let set = EventSet {
            sun_set: event(EventKind::SunSet, 4.0),
            sun_rise: event(EventKind::SunRise, 3.0),
            moon_rise: event(EventKind::MoonRise, 2.0),
            moon_set: event(EventKind::MoonSet, 1.0),
        };
        let kinds: Vec<EventKind> = set.fixed_order().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![
            EventKind::SunSet,
            EventKind::SunRise,
            EventKind::MoonSet,
            EventKind::MoonRise
        ]);
    }
}
