//! Nightly observing report for a fixed ground-based observatory.
//!
//! This crate provides:
//! - The [`Event`]/[`EventSet`] model: the four horizon crossings of
//!   one observing night, annotated with lunar illumination
//! - [`TwilightCalculator`] and [`MoonCalculator`], which turn a UT
//!   calendar date into those events through an [`Ephemeris`] provider
//! - [`render`], the ordered and CSV report writers
//! - [`NightSchedule`], the observing windows (night, dark,
//!   moonlight) and dark-run classification derived from an event set
//!
//! A report is all-or-nothing: a circumpolar Sun or Moon fails the
//! whole date with a [`ReportError`] instead of emitting a partial
//! event set.

pub mod error;
pub mod event;
pub mod format;
pub mod moon;
pub mod schedule;
pub mod twilight;

pub use error::ReportError;
pub use event::{Event, EventKind, EventSet};
pub use format::{Clock, RenderMode, ReportOptions, render};
pub use moon::MoonCalculator;
pub use schedule::{MoonObserving, NightClass, NightSchedule, Window};
pub use twilight::{TwilightCalculator, TwilightThresholds};

use vesper_ephem::{Ephemeris, Observer};
use vesper_time::{CalendarDate, ZoneOffset};

/// Compute the full four-event set for one UT date.
pub fn night_events<E: Ephemeris>(
    provider: &E,
    date: CalendarDate,
    observer: Observer,
    thresholds: TwilightThresholds,
    local_zone: ZoneOffset,
) -> Result<EventSet, ReportError> {
    let (moon_rise, moon_set) = MoonCalculator::new(observer, local_zone).events(provider, date)?;
    let (sun_set, sun_rise) =
        TwilightCalculator::new(observer, thresholds, local_zone).events(provider, date)?;
    Ok(EventSet {
        sun_set,
        sun_rise,
        moon_rise,
        moon_set,
    })
}
