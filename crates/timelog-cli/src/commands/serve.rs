//! Implementation of the `timelog serve` command.

use chrono::NaiveDate;
use tokio::runtime::Builder;

use crate::config::{StoreArgs, TemplateArgs};
use crate::server::{serve, App};

/// Arguments for the serve command.
#[derive(Debug, clap::Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TIMELOG_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub template: TemplateArgs,

    /// Treat this date (YYYY-MM-DD) as today instead of the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Run the serve command.
pub fn run_serve(args: ServeArgs) -> miette::Result<i32> {
    let store = args
        .store
        .open()
        .map_err(|e| miette::miette!("Cannot open event store: {}", e))?;
    if !args.template.template.is_file() {
        log::warn!(
            "template {} does not exist yet; the log page will fail until it does",
            args.template.template.display()
        );
    }
    let app = App {
        store,
        template: args.template.template,
        today: args.today,
    };

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| miette::miette!("Cannot start runtime: {}", e))?;
    runtime
        .block_on(serve(&args.bind, app))
        .map_err(|e| miette::miette!("Server on {} failed: {}", args.bind, e))?;

    Ok(exitcode::OK)
}
