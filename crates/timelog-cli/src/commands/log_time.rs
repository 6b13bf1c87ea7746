//! Implementation of the `timelog log` command.

use chrono::NaiveDate;
use serde::Serialize;
use timelog::TimeEntry;

use crate::config::StoreArgs;
use crate::page::local_today;

/// Arguments for the log command.
#[derive(Debug, clap::Args)]
pub struct LogArgs {
    /// Day the time was spent (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Start hour
    #[arg(long)]
    pub hour: String,

    /// Start minute
    #[arg(long, default_value = "0")]
    pub minute: String,

    /// Hours spent
    #[arg(long)]
    pub total_hours: String,

    /// Project the time was spent on
    #[arg(long)]
    pub project: String,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a recorded entry.
#[derive(Serialize)]
struct LogResult<'a> {
    path: String,
    entry: &'a TimeEntry,
}

/// Run the log command.
pub fn run_log(args: LogArgs) -> miette::Result<i32> {
    let store = args
        .store
        .open()
        .map_err(|e| miette::miette!("Cannot open event store: {}", e))?;

    let entry = TimeEntry::builder()
        .day(args.date.unwrap_or_else(local_today))
        .start_hour(args.hour)
        .start_minute(args.minute)
        .total_hours(args.total_hours)
        .project(args.project)
        .build();

    let path = store
        .append(&entry)
        .map_err(|e| miette::miette!("Cannot record entry: {}", e))?;

    if args.json {
        let output = LogResult {
            path: path.display().to_string(),
            entry: &entry,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Cannot encode output: {}", e))?;
        println!("{json}");
    } else {
        println!(
            "Logged {}h on {} for {} ({})",
            entry.total_hours,
            entry.day,
            entry.project,
            path.display()
        );
    }
    Ok(exitcode::OK)
}
