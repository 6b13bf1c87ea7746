//! Implementation of the `timelog render` command.

use std::fs::write;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::{StoreArgs, TemplateArgs};
use crate::page::{local_today, render_log_page, PageError};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub template: TemplateArgs,

    /// Treat this date (YYYY-MM-DD) as today instead of the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Write the page to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let store = args
        .store
        .open()
        .map_err(|e| miette::miette!("Cannot open event store: {}", e))?;
    let today = args.today.unwrap_or_else(local_today);

    let page = match render_log_page(&args.template.template, &store, today) {
        Ok(page) => page,
        Err(e @ PageError::Template { .. }) => {
            eprintln!("Render error: {}", e);
            return Ok(exitcode::DATAERR);
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    match &args.output {
        Some(path) => {
            write(path, page)
                .map_err(|e| miette::miette!("Cannot write {}: {}", path.display(), e))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    Ok(exitcode::OK)
}
