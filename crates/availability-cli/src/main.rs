//! `availability` CLI — list free time between calendar events.
//!
//! Events are read as JSON (a bare array, or a Google Calendar `events.list`
//! response with an `items` array) from a file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Explicit window, events from a file
//! availability -S 2018-10-10 -E 2018-10-12 -i events.json
//!
//! # From now until one week from now, events on stdin
//! cat events.json | availability --now
//!
//! # Next five days, 15 minute buffer, only slots of an hour or more
//! availability -n 5d -b 15 -m 60 -i events.json
//!
//! # Machine-readable output in a given timezone
//! availability -S 2018-10-10 -E 2018-10-12 -t Europe/Helsinki --json -i events.json
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use availability_engine::{
    apply_offset, busy_intervals, compute_availability, is_chronological, parse_date_in,
    parse_events, AvailabilityConfig, AvailabilitySlot, CalendarEvent, TimeInterval,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Range used by `--now` when no value is given.
const DEFAULT_NOW_RANGE: &str = "1w";

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Finds and lists out availability between calendar events"
)]
struct Cli {
    /// Availability search start date
    #[arg(short = 'S', long)]
    start_date: Option<String>,

    /// Availability search end date
    #[arg(short = 'E', long)]
    end_date: Option<String>,

    /// Search relative to the current time; RANGE is an offset such as 5d or 1w
    #[arg(
        short,
        long,
        value_name = "RANGE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_NOW_RANGE
    )]
    now: Option<String>,

    /// Output date format (strftime pattern)
    #[arg(short, long)]
    date_format: Option<String>,

    /// Minutes of buffer around each event
    #[arg(short, long)]
    buffer: Option<u32>,

    /// Shortest slot to report, in minutes
    #[arg(short, long)]
    min_duration: Option<u32>,

    /// IANA timezone for output and for dates without an offset
    #[arg(short, long)]
    timezone: Option<String>,

    /// Events JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Print slots as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SlotDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&AvailabilitySlot> for SlotDto {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            start: slot.start.to_rfc3339(),
            end: slot.end.to_rfc3339(),
            duration_minutes: slot.duration_minutes(),
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    if !(cli.start_date.is_some() && cli.end_date.is_some()) && cli.now.is_none() {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "either --start-date and --end-date, or --now, is required",
            )
            .exit();
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;
    let tz = config.tz()?;

    let window = resolve_window(&cli, tz)?;
    info!(start = %window.start, end = %window.end, "search window");

    let events = read_events(cli.input.as_deref())?;
    let busy = busy_intervals(&events, tz).context("Failed to resolve event times")?;
    if !is_chronological(&busy) {
        warn!("events are not sorted by start time or overlap; results may be incomplete");
    }

    let slots = compute_availability(&window, &busy, config.params());

    if cli.json {
        let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
        println!("{}", serde_json::to_string_pretty(&dtos)?);
    } else {
        print_slots(&window, &slots, &config.display_format, tz);
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

/// Start from the config file (or defaults) and apply flag overrides.
fn load_config(cli: &Cli) -> Result<AvailabilityConfig> {
    let mut config: AvailabilityConfig = match cli.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            debug!(path, "loaded config file");
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => AvailabilityConfig::default(),
    };

    if let Some(buffer) = cli.buffer {
        config.buffer_minutes = buffer;
    }
    if let Some(minimum) = cli.min_duration {
        config.min_duration_minutes = minimum;
    }
    if let Some(format) = &cli.date_format {
        config.display_format = format.clone();
    }
    if let Some(timezone) = &cli.timezone {
        config.timezone = timezone.clone();
    }

    Ok(config)
}

/// Explicit dates win; `--now` fills in whichever side is missing.
fn resolve_window(cli: &Cli, tz: Tz) -> Result<TimeInterval> {
    let now = Utc::now();
    let range = cli.now.as_deref().unwrap_or(DEFAULT_NOW_RANGE);

    let start = match cli.start_date.as_deref() {
        Some(text) => parse_flag_date(text, tz, "--start-date")?,
        None => now,
    };
    let end = match cli.end_date.as_deref() {
        Some(text) => parse_flag_date(text, tz, "--end-date")?,
        None => apply_offset(now, range).context("Invalid --now range")?,
    };

    if end < start {
        bail!(
            "Search window ends before it starts: {} is after {}",
            start.to_rfc3339(),
            end.to_rfc3339()
        );
    }

    Ok(TimeInterval::new(start, end))
}

fn parse_flag_date(text: &str, tz: Tz, flag: &str) -> Result<DateTime<Utc>> {
    parse_date_in(text, tz).with_context(|| format!("Invalid {}", flag))
}

/// Blank input means an empty calendar.
fn read_events(path: Option<&str>) -> Result<Vec<CalendarEvent>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    if json.trim().is_empty() {
        info!("no events supplied");
        return Ok(Vec::new());
    }

    let events = parse_events(&json).context("Failed to parse events")?;
    debug!(count = events.len(), "parsed events");
    Ok(events)
}

fn print_slots(window: &TimeInterval, slots: &[AvailabilitySlot], format: &str, tz: Tz) {
    println!(
        "Availability from {} to {}:",
        window.start.with_timezone(&tz).format(format),
        window.end.with_timezone(&tz).format(format)
    );

    if slots.is_empty() {
        println!("No availability found.");
        return;
    }

    for slot in slots {
        println!("\u{2022} {}", slot.render(format, tz));
    }
}
