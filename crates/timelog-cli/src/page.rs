//! Rendering of the log page shared by `serve` and `render`.

use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;
use timelog::{recent_entries, render_str, EventStore, StoreError, TemplateError};

/// An error producing the log page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The template file could not be read.
    #[error("cannot read template '{path}': {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template failed to parse or render.
    #[error("template '{path}': {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// Stored entries could not be read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The local calendar date, used as "today" for the page.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render the log page: the template at `template` filled with the
/// entries of `today` and the day before.
///
/// The template and the records are read afresh on every call.
pub fn render_log_page(
    template: &Path,
    store: &EventStore,
    today: NaiveDate,
) -> Result<String, PageError> {
    let source = read_to_string(template).map_err(|source| PageError::ReadTemplate {
        path: template.to_path_buf(),
        source,
    })?;
    let entries = store.load_all()?;
    let model = recent_entries(&entries, today);
    log::debug!(
        "rendering {} with {} stored entries",
        template.display(),
        entries.len()
    );
    render_str(&source, &model).map_err(|source| PageError::Template {
        path: template.to_path_buf(),
        source,
    })
}
