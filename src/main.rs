// Observance Calendar
// Command line front end over the classification core

mod render;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use observance_calendar::models::calendar_day::CalendarDay;
use observance_calendar::models::settings::Settings;
use observance_calendar::services::event::source::{EventSource, FetchOutcome, InMemoryEventSource};
use observance_calendar::services::settings::SettingsService;
use observance_calendar::utils::date::normalize_instant;

#[derive(Parser)]
#[command(name = "observance-calendar")]
#[command(about = "Show cultural and religious observances on a month grid or a day list")]
struct Cli {
    /// Event payload (JSON array or {"events": [...]})
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    /// Settings file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured date format
    #[arg(long, global = true)]
    date_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Month grid with marked days, plus the month's digest
    Month {
        year: i32,
        /// 1-12
        month: u32,

        /// First column of the grid (0 = Sunday ... 6 = Saturday)
        #[arg(long)]
        first_day_of_week: Option<u8>,
    },
    /// Events on one day, grouped into regular and extended observances
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Observances that have not ended yet
    Upcoming {
        /// Count from this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_ref())?;
    if let Some(date_format) = cli.date_format {
        settings.date_format = date_format;
        settings.validate().map_err(|e| anyhow!(e))?;
    }

    let events_path = cli
        .events
        .or_else(|| settings.events_file.clone())
        .ok_or_else(|| anyhow!("No event file given; pass --events or set events_file in settings"))?;
    let source = InMemoryEventSource::from_json_file(&events_path)?;
    log::info!("Loaded {} events from {}", source.len(), events_path.display());

    match cli.command {
        Commands::Month {
            year,
            month,
            first_day_of_week,
        } => {
            if let Some(first_day) = first_day_of_week {
                settings.first_day_of_week = first_day;
                settings.validate().map_err(|e| anyhow!(e))?;
            }
            let outcome = FetchOutcome::from_result(source.fetch_by_month(year, month));
            report_failure(&outcome);
            print!("{}", render::month(year, month, &outcome.events, &settings)?);
        }
        Commands::Day { date } => {
            let day: CalendarDay = date.parse()?;
            let outcome = FetchOutcome::from_result(source.fetch_by_day(day));
            report_failure(&outcome);
            print!("{}", render::day(day, &outcome.events, &settings));
        }
        Commands::Upcoming { from, limit } => {
            let today = match from {
                Some(date) => date.parse()?,
                None => normalize_instant(&Utc::now()),
            };
            let outcome = FetchOutcome::from_result(source.fetch_all());
            report_failure(&outcome);
            let limit = limit.unwrap_or(settings.upcoming_limit);
            print!("{}", render::upcoming(today, limit, &outcome.events, &settings));
        }
    }

    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    let service = match path {
        Some(path) => SettingsService::new(path),
        None => match SettingsService::from_default_location() {
            Ok(service) => service,
            Err(e) => {
                log::warn!("{}, using default settings", e);
                return Ok(Settings::default());
            }
        },
    };

    service.get()
}

fn report_failure(outcome: &FetchOutcome) {
    if outcome.failed {
        eprintln!("Events could not be loaded; showing an empty calendar.");
    }
}
