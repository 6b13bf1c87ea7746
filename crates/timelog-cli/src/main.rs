//! timelog CLI entry point.
//!
//! Provides the time logging web endpoint and supporting tools:
//! - `timelog serve` - Serve the log page and accept form submissions
//! - `timelog log` - Record a time entry from the command line
//! - `timelog render` - Render the log page to stdout
//! - `timelog entries` - List stored time entries
//! - `timelog check` - Validate page template syntax

mod commands;
mod config;
mod output;
mod page;
mod server;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_entries, run_log, run_render, run_serve, CheckArgs, EntriesArgs, LogArgs,
    RenderArgs, ServeArgs,
};
use env_logger::{Builder, Env};

/// Personal time logging.
#[derive(Debug, Parser)]
#[command(name = "timelog")]
#[command(about = "Personal time logging endpoint and tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose (debug) logging; RUST_LOG takes precedence
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the log page over HTTP
    Serve(ServeArgs),
    /// Record a time entry
    Log(LogArgs),
    /// Render the log page to stdout
    Render(RenderArgs),
    /// List stored time entries
    Entries(EntriesArgs),
    /// Check page template syntax
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Initialise `env_logger`, defaulting to `info` (or `debug` when verbose).
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args),
        Commands::Log(args) => run_log(args),
        Commands::Render(args) => run_render(args),
        Commands::Entries(args) => run_entries(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
