//! Observing windows derived from one night's event set.
//!
//! The four crossings split the night into usable spans: the night
//! window (when any observing can run), the dark window (moon below
//! the horizon), and the moonlight window (moon up, dim enough for
//! moonlight or reduced-high-voltage observing). A night whose dark
//! window reaches two hours counts toward a dark run.
//!
//! The signed illumination convention carries through unchanged: a
//! Sun event's fraction is negative when the moon is down, so the
//! `max` comparisons against the thresholds only bite when the moon
//! is actually up at that boundary.

use crate::event::{Event, EventKind, EventSet};

/// Brightest illuminated fraction usable with reduced high voltage.
pub const MAX_RHV_FRACTION: f64 = 0.666;

/// Brightest illuminated fraction usable at nominal voltage.
pub const MAX_MOON_FRACTION: f64 = 0.300;

/// Shortest dark window that counts toward a dark run, in days.
pub const MIN_DARK_RUN_DAYS: f64 = 2.0 / 24.0;

/// A span of time within one night, as UTC Julian dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start_jd: f64,
    pub end_jd: f64,
}

impl Window {
    pub fn new(start_jd: f64, end_jd: f64) -> Self {
        Self { start_jd, end_jd }
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Operating mode while the moon is up during the night window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonObserving {
    /// Moon up but below [`MAX_MOON_FRACTION`]: nominal voltage.
    Moonlight,
    /// Moon between the moonlight and RHV limits: reduced voltage.
    ReducedHv,
}

/// Whether the night counts toward a dark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightClass {
    /// Dark window of at least [`MIN_DARK_RUN_DAYS`].
    DarkRun,
    /// Too little dark time; bright-run night.
    BrightRun,
}

/// The observing windows of one night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightSchedule {
    /// When observing in any mode can run.
    pub night: Window,
    /// Moon below the horizon; `None` when the moon is up all night.
    pub dark: Option<Window>,
    /// Moon above the horizon during the night; `None` when it is
    /// down all night.
    pub moon: Option<Window>,
    /// Mode for the moon window; `None` when the moon is too bright
    /// (or there is no moon window).
    pub moon_observing: Option<MoonObserving>,
    /// The single moon crossing inside the twilight window, if any.
    pub moon_event: Option<Event>,
    pub class: NightClass,
}

impl NightSchedule {
    /// Derive the windows from a computed event set.
    ///
    /// The case split keys on where the two moon crossings fall
    /// relative to the twilight window. When exactly one falls
    /// inside, the first event after Sun Set decides whether the
    /// night is shortened (rising moon) or starts late (setting
    /// moon).
    pub fn derive(set: &EventSet) -> Self {
        let sun_set = &set.sun_set;
        let sun_rise = &set.sun_rise;
        let moon_rise = &set.moon_rise;
        let moon_set = &set.moon_set;

        let moon_event = {
            let ordered = set.chronological();
            ordered
                .iter()
                .position(|e| e.kind == EventKind::SunSet)
                .and_then(|i| ordered.get(i + 1))
                .filter(|e| matches!(e.kind, EventKind::MoonRise | EventKind::MoonSet))
                .map(|e| **e)
        };
        let rising = matches!(moon_event.map(|e| e.kind), Some(EventKind::MoonRise));

        let moon_up_all_night = moon_rise.jd < sun_set.jd && moon_set.jd > sun_rise.jd;
        let moon_down_all_night = moon_set.jd < sun_set.jd && moon_rise.jd > sun_rise.jd;
        let both_before_set = moon_set.jd < sun_set.jd && moon_rise.jd < sun_set.jd;
        let both_after_rise = moon_set.jd > sun_rise.jd && moon_rise.jd > sun_rise.jd;

        let night = if moon_up_all_night
            || moon_down_all_night
            || both_before_set
            || both_after_rise
        {
            Window::new(sun_set.jd, sun_rise.jd)
        } else if rising {
            // A bright rising moon ends the night early.
            let brightest = sun_rise.moon_illumination.max(moon_rise.moon_illumination);
            let end = if brightest > MAX_RHV_FRACTION {
                moon_rise.jd
            } else {
                sun_rise.jd
            };
            Window::new(sun_set.jd, end)
        } else {
            // A bright setting moon delays the start of the night.
            let brightest = sun_set.moon_illumination.max(moon_set.moon_illumination);
            let start = if brightest <= MAX_RHV_FRACTION {
                sun_set.jd
            } else {
                moon_set.jd
            };
            Window::new(start, sun_rise.jd)
        };

        let dark = if moon_up_all_night {
            None
        } else if moon_down_all_night {
            Some(Window::new(sun_set.jd, sun_rise.jd))
        } else if both_before_set {
            // Last crossing before sunset was a set: down all night.
            (moon_set.jd > moon_rise.jd).then(|| Window::new(sun_set.jd, sun_rise.jd))
        } else if both_after_rise {
            // First crossing after sunrise is a rise: down all night.
            (moon_rise.jd < moon_set.jd).then(|| Window::new(sun_set.jd, sun_rise.jd))
        } else if rising {
            Some(Window::new(sun_set.jd, moon_rise.jd))
        } else {
            Some(Window::new(moon_set.jd, sun_rise.jd))
        };

        let (moon, moon_observing) = if moon_up_all_night {
            (Some(Window::new(sun_set.jd, sun_rise.jd)), None)
        } else if moon_down_all_night {
            (None, None)
        } else if both_before_set {
            if moon_rise.jd > moon_set.jd {
                (
                    Some(Window::new(sun_set.jd, sun_rise.jd)),
                    observing_mode(sun_set.moon_illumination.max(sun_rise.moon_illumination)),
                )
            } else {
                (None, None)
            }
        } else if both_after_rise {
            if moon_set.jd < moon_rise.jd {
                (
                    Some(Window::new(sun_set.jd, sun_rise.jd)),
                    observing_mode(sun_set.moon_illumination.max(sun_rise.moon_illumination)),
                )
            } else {
                (None, None)
            }
        } else if rising {
            // Illumination grows while a rising moon is up; judge by
            // its brightest.
            (
                Some(Window::new(moon_rise.jd, sun_rise.jd)),
                observing_mode(moon_rise.moon_illumination.max(sun_rise.moon_illumination)),
            )
        } else {
            (
                Some(Window::new(sun_set.jd, moon_set.jd)),
                observing_mode(sun_set.moon_illumination.max(moon_set.moon_illumination)),
            )
        };

        let dark_days = dark.map_or(0.0, |w| w.duration_days());
        let class = if dark_days >= MIN_DARK_RUN_DAYS {
            NightClass::DarkRun
        } else {
            NightClass::BrightRun
        };

        Self {
            night,
            dark,
            moon,
            moon_observing,
            moon_event,
            class,
        }
    }
}

fn observing_mode(brightest_fraction: f64) -> Option<MoonObserving> {
    if brightest_fraction < MAX_MOON_FRACTION {
        Some(MoonObserving::Moonlight)
    } else if brightest_fraction < MAX_RHV_FRACTION {
        Some(MoonObserving::ReducedHv)
    } else {
        None
    }
}
