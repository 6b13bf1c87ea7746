//! Error types for the event store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An error reading or writing stored time entries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File system error on a store path.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stored record is not a valid time entry.
    #[error("failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A time entry could not be serialized.
    #[error("failed to encode time entry: {0}")]
    Encode(#[source] serde_json::Error),
}
