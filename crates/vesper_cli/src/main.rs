//! `vesper` — nightly observing report for the fixed observatory.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use vesper_ephem::{AstroEphemeris, Observer};
use vesper_report::{
    Clock, RenderMode, ReportOptions, TwilightThresholds, night_events, render,
};
use vesper_time::{CalendarDate, ZoneOffset};

/// Observatory location (degrees; longitude east-positive).
const OBSERVATORY: Observer = Observer::new(31.675, -110.952);

/// The fixed local offset the report can print in (MST, UT-7).
const LOCAL_ZONE: ZoneOffset = ZoneOffset::from_hours(-7);

#[derive(Parser)]
#[command(
    name = "vesper",
    about = "Nightly sun/moon rise and set report",
    after_help = "YEAR must be four digits. The date is the UT date.\n\n\
                  CSV output is a comma separated list of:\n\
                  Sun Set, % Moon @ Sun Set, Sun Rise, % Moon @ Sun Rise, \
                  Moon Set, % Moon @ Moon Set, Moon Rise, % Moon @ Moon Rise\n\n\
                  Times are UT unless the -l switch is used. A negative moon\n\
                  fraction at a sun event means the moon is below the horizon."
)]
struct Cli {
    /// UT year, exactly four digits
    year: String,
    /// UT month (1-12)
    month: u32,
    /// UT day of month (1-31)
    day: u32,
    /// Dump output in CSV format for a spreadsheet
    #[arg(short = 'c', long)]
    csv: bool,
    /// Output times in the fixed local zone (MST) instead of UT
    #[arg(short = 'l', long)]
    local: bool,
    /// Append the +00/-07 zone suffix to each timestamp
    #[arg(short = 'z', long)]
    zone: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.year.len() != 4 || !cli.year.bytes().all(|b| b.is_ascii_digit()) {
        eprintln!("vesper: invalid year '{}': must be four digits", cli.year);
        return ExitCode::FAILURE;
    }
    // Bound checks only; deeper calendar validity is not enforced.
    let year: i32 = match cli.year.parse() {
        Ok(y) => y,
        Err(e) => {
            eprintln!("vesper: invalid year '{}': {e}", cli.year);
            return ExitCode::FAILURE;
        }
    };
    if cli.month == 0 || cli.month > 12 {
        eprintln!("vesper: invalid month {}", cli.month);
        return ExitCode::FAILURE;
    }
    if cli.day == 0 || cli.day > 31 {
        eprintln!("vesper: invalid day {}", cli.day);
        return ExitCode::FAILURE;
    }

    let date = CalendarDate::new(year, cli.month, cli.day);
    let set = match night_events(
        &AstroEphemeris::new(),
        date,
        OBSERVATORY,
        TwilightThresholds::default(),
        LOCAL_ZONE,
    ) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("vesper: {e}");
            return ExitCode::FAILURE;
        }
    };

    let opts = ReportOptions {
        mode: if cli.csv { RenderMode::Csv } else { RenderMode::Ordered },
        clock: if cli.local { Clock::Local } else { Clock::Ut },
        show_zone: cli.zone,
        // The ordered listing has always carried the raw julian date.
        verbose: !cli.csv,
        local_zone: LOCAL_ZONE,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = render(&mut out, &set, &opts).and_then(|()| out.flush()) {
        eprintln!("vesper: write error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
