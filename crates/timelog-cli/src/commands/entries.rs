//! Implementation of the `timelog entries` command.

use chrono::NaiveDate;

use crate::config::StoreArgs;
use crate::output::table::format_entries_table;

/// Arguments for the entries command.
#[derive(Debug, clap::Args)]
pub struct EntriesArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Only list entries on or after this day (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Only list entries for this project
    #[arg(long)]
    pub project: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the entries command.
pub fn run_entries(args: EntriesArgs) -> miette::Result<i32> {
    let store = args
        .store
        .open()
        .map_err(|e| miette::miette!("Cannot open event store: {}", e))?;
    let mut entries = store
        .load_all()
        .map_err(|e| miette::miette!("Cannot read entries: {}", e))?;

    entries.retain(|entry| {
        args.since.is_none_or(|since| entry.day >= since)
            && args
                .project
                .as_ref()
                .is_none_or(|project| &entry.project == project)
    });

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| miette::miette!("Cannot encode entries: {}", e))?;
        println!("{json}");
    } else if entries.is_empty() {
        println!("No entries in {}", store.dir().display());
    } else {
        println!("{}", format_entries_table(&entries));
    }
    Ok(exitcode::OK)
}
