// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::float_cmp,
        reason = "Allow these lints in tests to improve the readability of the tests"
    )
)]

//! Looks up the time in any time zone, converts times between zones and suggests zone names.
//!
//! # Usage
//!
//! ```bash
//! tmz local --watch
//! tmz lookup Asia/Tokyo
//! tmz convert --from America/New_York --to Europe/London --date 2024-01-15 --time 09:00
//! tmz convert --to Asia/Tokyo
//! tmz search york
//! ```
//!
//! Add `--json` to any command for machine-readable output. Errors exit with status 1.

mod refresh;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tick::Clock;
use tmz::{CatalogOptions, DatabaseZoneRules, FallbackZoneRules, TimeConversionEngine, ZoneCatalog, ZoneRules};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::refresh::{DEFAULT_INTERVAL, Refresh};
use crate::render::Output;

#[derive(Parser, Debug)]
#[command(name = "tmz", version, about = "Looks up and converts times across time zones")]
struct Cli {
    /// Where zone names and rules come from
    #[arg(long, value_enum, default_value_t = Tzdb::System, global = true)]
    tzdb: Tzdb,

    /// Zoneinfo directory to read instead of the system default, used with `--tzdb system`
    #[arg(long, value_name = "DIR", env = "TZDIR", global = true)]
    zoneinfo: Option<PathBuf>,

    /// Characters a search query needs before zones are suggested
    #[arg(long, value_name = "CHARS", default_value_t = CatalogOptions::new().get_min_query_chars(), global = true)]
    min_chars: usize,

    /// Maximum number of suggested zones
    #[arg(long, value_name = "N", default_value_t = CatalogOptions::new().get_max_results(), global = true)]
    max_results: usize,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more details to stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Tzdb {
    /// The database installed on this machine, or the bundled copy when there is none
    System,
    /// The database compiled into this binary
    Bundled,
    /// A short list of common zones
    Fallback,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the local time of this machine
    Local {
        /// Keep refreshing the time
        #[arg(long)]
        watch: bool,

        /// Seconds between refreshes
        #[arg(long, value_name = "SECS", default_value_t = DEFAULT_INTERVAL.as_secs(), requires = "watch")]
        interval: u64,

        /// Stop after this many refreshes
        #[arg(long, value_name = "N", requires = "watch")]
        count: Option<u64>,
    },

    /// Show the current time in a zone
    Lookup {
        /// Zone name, such as Europe/Paris
        zone: String,
    },

    /// Convert a date and time from one zone to another
    Convert {
        /// Zone the date and time are given in, the zone of this machine by default
        #[arg(long, value_name = "ZONE")]
        from: Option<String>,

        /// Zone to convert to
        #[arg(long, value_name = "ZONE")]
        to: String,

        /// Date as YYYY-MM-DD, today in the source zone by default
        #[arg(long)]
        date: Option<String>,

        /// Time as HH:MM or HH:MM:SS, the current time in the source zone by default
        #[arg(long)]
        time: Option<String>,
    },

    /// Suggest zone names containing a query
    Search {
        /// Part of a zone name, such as york
        query: String,

        /// Maximum number of suggestions, overrides --max-results
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let clock = Clock::new_tokio();
    let rules = zone_rules(cli.tzdb, cli.zoneinfo.as_deref());
    let output = Output::new(cli.json);
    let engine = TimeConversionEngine::from_shared(Arc::clone(&rules), &clock);

    match cli.command {
        Command::Local { watch, interval, count } => {
            let render = || {
                let snapshot = engine.local_snapshot()?;
                let mut out = io::stdout().lock();
                output.snapshot(&mut out, &snapshot)?;
                out.flush().context("cannot write to stdout")
            };

            if watch {
                Refresh::new(&clock, Duration::from_secs(interval)).count(count).run(render).await
            } else {
                render()
            }
        }
        Command::Lookup { zone } => {
            let snapshot = engine.current_snapshot(&zone)?;
            output.snapshot(&mut io::stdout().lock(), &snapshot)
        }
        Command::Convert { from, to, date, time } => {
            let from = from.unwrap_or_else(|| engine.local_zone_or_utc().to_string());
            let (date, time) = fill_now(&engine, &from, date, time)?;
            let result = engine.convert_input(&from, &date, &time, &to)?;
            output.conversion(&mut io::stdout().lock(), &result)
        }
        Command::Search { query, limit } => {
            let options = CatalogOptions::new().min_query_chars(cli.min_chars).max_results(cli.max_results);
            let catalog = ZoneCatalog::load(rules.as_ref(), options);
            let zones = catalog.search_limit(&query, limit.unwrap_or(cli.max_results));
            output.suggestions(&mut io::stdout().lock(), &zones)
        }
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(level))
        .try_init()
        .context("cannot install the log subscriber")
}

fn zone_rules(tzdb: Tzdb, zoneinfo: Option<&std::path::Path>) -> Arc<dyn ZoneRules> {
    match (tzdb, zoneinfo) {
        (Tzdb::System, Some(dir)) => match DatabaseZoneRules::from_dir(dir) {
            Ok(rules) => Arc::new(rules),
            Err(error) => {
                tracing::event!(
                    name: "tmz.cli.zoneinfo_unavailable",
                    Level::WARN,
                    error = %error,
                    "cannot read the zoneinfo directory, using the fallback zones"
                );
                Arc::new(FallbackZoneRules::new())
            }
        },
        (Tzdb::System, None) => Arc::new(DatabaseZoneRules::system()),
        (Tzdb::Bundled, _) => Arc::new(DatabaseZoneRules::bundled()),
        (Tzdb::Fallback, _) => Arc::new(FallbackZoneRules::new()),
    }
}

/// Fills a missing date or time with "now" in `zone`, the way the form fields are pre-filled.
fn fill_now(engine: &TimeConversionEngine, zone: &str, date: Option<String>, time: Option<String>) -> Result<(String, String)> {
    if let (Some(date), Some(time)) = (&date, &time) {
        return Ok((date.clone(), time.clone()));
    }

    let now = engine.current_snapshot(zone)?;
    let local = now.local();

    Ok((
        date.unwrap_or_else(|| local.date().to_string()),
        time.unwrap_or_else(|| format!("{:02}:{:02}", local.hour(), local.minute())),
    ))
}
