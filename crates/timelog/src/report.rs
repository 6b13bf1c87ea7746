//! Builds the page model from stored time entries.
//!
//! The log page shows what was logged today and yesterday. Entries are
//! bucketed into two ranges, [`TODAY`] and [`YESTERDAY`], each child model
//! carrying the fields produced by [`TimeEntry::to_model`].

use chrono::{Days, NaiveDate};

use crate::types::{Model, TimeEntry};

/// Range name for entries logged against today (or a later day).
pub const TODAY: &str = "today";

/// Range name for entries logged against the day before today.
pub const YESTERDAY: &str = "yesterday";

/// Build the page model for the entries of `today` and the day before.
///
/// Entries dated two or more days before `today` are dropped. An entry dated
/// exactly one day before goes into [`YESTERDAY`]; every other remaining
/// entry, including future-dated ones, goes into [`TODAY`]. Within a bucket
/// the input order is kept. A bucket with no entries is left out of the
/// model, so templates fall back to their `if-nothing` text.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timelog::{TimeEntry, recent_entries};
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let entry = TimeEntry::builder()
///     .day(today)
///     .start_hour("9")
///     .start_minute("0")
///     .total_hours("1")
///     .project("garden")
///     .build();
///
/// let model = recent_entries(&[entry], today);
/// assert_eq!(model.children("today").map(<[_]>::len), Some(1));
/// assert!(model.children("yesterday").is_none());
/// ```
pub fn recent_entries<'a>(
    entries: impl IntoIterator<Item = &'a TimeEntry>,
    today: NaiveDate,
) -> Model {
    let yesterday = today.checked_sub_days(Days::new(1));
    let cutoff = today.checked_sub_days(Days::new(2));

    let mut model = Model::new();
    for entry in entries {
        if cutoff.is_some_and(|cutoff| entry.day <= cutoff) {
            continue;
        }
        let bucket = if Some(entry.day) == yesterday {
            YESTERDAY
        } else {
            TODAY
        };
        model.push_child(bucket, entry.to_model());
    }
    model
}
