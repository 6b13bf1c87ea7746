//! Shared configuration arguments.
//!
//! Every setting can come from a flag or an environment variable; flags win.

use std::path::PathBuf;

use timelog::{EventStore, StoreError};

/// Where time entry records live.
#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    /// Directory holding one JSON file per logged entry
    #[arg(long, env = "TIMELOG_EVENTS_DIR", default_value = "events")]
    pub events_dir: PathBuf,
}

impl StoreArgs {
    /// Open the configured store, creating its directory if needed.
    pub fn open(&self) -> Result<EventStore, StoreError> {
        EventStore::open(&self.events_dir)
    }
}

/// Which page template to render.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplateArgs {
    /// Page template file
    #[arg(long, env = "TIMELOG_TEMPLATE", default_value = "layout/log-time.html")]
    pub template: PathBuf,
}
