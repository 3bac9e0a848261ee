//! Report rendering: chronological listing or fixed-column CSV.

use std::io::{self, Write};

use vesper_time::{DateTimeFields, ZoneOffset};

use crate::event::{Event, EventSet};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One event per line, chronological order, with moon annotation.
    Ordered,
    /// All four events on one comma-separated line, fixed column
    /// order, for spreadsheet import.
    Csv,
}

/// Which calendar projection the timestamps use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Ut,
    Local,
}

/// Caller configuration for [`render`].
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub mode: RenderMode,
    pub clock: Clock,
    /// Append the `+00`/`-07` zone suffix to every timestamp.
    pub show_zone: bool,
    /// Trailing raw Julian date on each ordered line.
    pub verbose: bool,
    /// The fixed local offset the events were projected into.
    pub local_zone: ZoneOffset,
}

impl ReportOptions {
    fn timestamp<'a>(&self, event: &'a Event) -> &'a DateTimeFields {
        match self.clock {
            Clock::Ut => &event.ut,
            Clock::Local => &event.local,
        }
    }

    fn suffix(&self) -> String {
        match self.clock {
            Clock::Ut => ZoneOffset::UTC.suffix(),
            Clock::Local => self.local_zone.suffix(),
        }
    }
}

/// Write the report for one night to `w`.
pub fn render<W: Write>(w: &mut W, set: &EventSet, opts: &ReportOptions) -> io::Result<()> {
    match opts.mode {
        RenderMode::Ordered => render_ordered(w, set, opts),
        RenderMode::Csv => render_csv(w, set, opts),
    }
}

fn render_ordered<W: Write>(w: &mut W, set: &EventSet, opts: &ReportOptions) -> io::Result<()> {
    for event in set.chronological() {
        write!(w, "{:>9}: {}", event.kind.label(), opts.timestamp(event))?;
        if opts.show_zone {
            write!(w, "{}", opts.suffix())?;
        }
        match event.moon_altitude_deg {
            Some(alt) => write!(w, " ({:7.4},{:9.4})", event.moon_illumination, alt)?,
            None => write!(w, " ({:7.4})", event.moon_illumination)?,
        }
        if opts.verbose {
            write!(w, " jd: {:.6}", event.jd)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn render_csv<W: Write>(w: &mut W, set: &EventSet, opts: &ReportOptions) -> io::Result<()> {
    for (i, event) in set.fixed_order().into_iter().enumerate() {
        if i > 0 {
            write!(w, ",")?;
        }
        write!(w, "{}", opts.timestamp(event))?;
        if opts.show_zone {
            write!(w, "{}", opts.suffix())?;
        }
        write!(w, ",{:.4}", event.moon_illumination)?;
    }
    writeln!(w)
}
