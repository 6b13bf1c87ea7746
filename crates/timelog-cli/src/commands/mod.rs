//! CLI command implementations.

mod check;
mod entries;
mod log_time;
mod render;
mod serve;

pub use check::{run_check, CheckArgs};
pub use entries::{run_entries, EntriesArgs};
pub use log_time::{run_log, LogArgs};
pub use render::{run_render, RenderArgs};
pub use serve::{run_serve, ServeArgs};
