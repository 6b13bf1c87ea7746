//! File-per-event storage of time entries.
//!
//! Every logged entry is written once, as its own JSON file named after the
//! UTC time it was recorded, and never modified afterwards. Reading the
//! store means reading every record file in the directory.

mod error;

use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

pub use error::StoreError;

use crate::types::TimeEntry;

/// Suffix shared by every record file.
pub const RECORD_SUFFIX: &str = "-LoggedTime.json";

/// A directory of time entry records.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timelog::{EventStore, TimeEntry};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = EventStore::open(dir.path().join("events")).unwrap();
///
/// let entry = TimeEntry::builder()
///     .day(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
///     .start_hour("9")
///     .start_minute("0")
///     .total_hours("1")
///     .project("garden")
///     .build();
/// store.append(&entry).unwrap();
///
/// assert_eq!(store.load_all().unwrap(), vec![entry]);
/// ```
#[derive(Debug, Clone)]
pub struct EventStore {
    dir: PathBuf,
}

impl EventStore {
    /// Open a store, creating its directory if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the record files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a new record for `entry`, stamped with the current UTC time.
    ///
    /// Returns the path of the written file.
    pub fn append(&self, entry: &TimeEntry) -> Result<PathBuf, StoreError> {
        self.append_at(entry, Utc::now())
    }

    /// Write a new record for `entry`, stamped with `recorded_at`.
    ///
    /// Existing records are never overwritten: if a record with the same
    /// stamp exists, a numeric suffix is added that sorts after it.
    pub fn append_at(
        &self,
        entry: &TimeEntry,
        recorded_at: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        let json = serde_json::to_string(entry).map_err(StoreError::Encode)?;
        let stamp = recorded_at.format("%Y%m%dT%H%M%S%.6fZ").to_string();

        let mut path = self.dir.join(format!("{stamp}{RECORD_SUFFIX}"));
        let mut attempt = 1;
        let mut file = loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    path = self.dir.join(format!("{stamp}_{attempt:03}{RECORD_SUFFIX}"));
                    attempt += 1;
                }
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        };

        file.write_all(json.as_bytes())
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        log::debug!("recorded time entry in {}", path.display());
        Ok(path)
    }

    /// Read every record in the store, oldest first.
    ///
    /// Records are ordered by file name, which starts with the time they
    /// were recorded. Files without the record suffix are ignored.
    ///
    /// # Errors
    ///
    /// Fails on the first record that cannot be read or decoded.
    pub fn load_all(&self) -> Result<Vec<TimeEntry>, StoreError> {
        let mut paths = self.record_paths()?;
        paths.sort();
        paths.iter().map(|path| read_record(path)).collect()
    }

    /// Paths of all record files, unordered.
    fn record_paths(&self) -> Result<Vec<PathBuf>, StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for dir_entry in fs::read_dir(&self.dir).map_err(io_error)? {
            let path = dir_entry.map_err(io_error)?.path();
            let is_record = path
                .file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| name.ends_with(RECORD_SUFFIX));
            if is_record && path.is_file() {
                paths.push(path);
            } else {
                log::debug!("skipping non-record path {}", path.display());
            }
        }
        Ok(paths)
    }
}

fn read_record(path: &Path) -> Result<TimeEntry, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
