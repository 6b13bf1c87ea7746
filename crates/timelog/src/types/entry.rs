use std::collections::HashMap;

use bon::Builder;
use chrono::{NaiveDate, ParseError as DateParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Model;

/// Date format of the `date` form field.
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged block of time.
///
/// Entries are stored as JSON with PascalCase keys:
///
/// ```json
/// {"Day":"2024-03-05T00:00:00","StartHour":"9","StartMinute":"30","TotalHours":"2","Project":"garden"}
/// ```
///
/// Hours, minutes and totals are kept as the text the user entered.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timelog::TimeEntry;
///
/// let entry = TimeEntry::builder()
///     .day(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
///     .start_hour("9")
///     .start_minute("30")
///     .total_hours("2")
///     .project("garden")
///     .build();
///
/// assert_eq!(entry.to_model().get("Hours"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "PascalCase")]
pub struct TimeEntry {
    /// The day the time was spent.
    #[serde(with = "day_format")]
    pub day: NaiveDate,
    pub start_hour: String,
    pub start_minute: String,
    pub total_hours: String,
    pub project: String,
}

/// An error decoding a submitted form into a [`TimeEntry`].
#[derive(Debug, Error)]
pub enum FormError {
    /// A required form field was not submitted.
    #[error("missing form field '{name}'")]
    MissingField { name: String },

    /// The `date` field is not a `YYYY-MM-DD` date.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: DateParseError,
    },
}

impl TimeEntry {
    /// Build an entry from decoded form fields.
    ///
    /// Reads `date` (as `YYYY-MM-DD`), `hour`, `minute`, `total-hours` and
    /// `project`. All five are required.
    pub fn from_form(form: &HashMap<String, String>) -> Result<TimeEntry, FormError> {
        let field = |name: &str| {
            form.get(name).cloned().ok_or_else(|| FormError::MissingField {
                name: name.to_string(),
            })
        };

        let date = field("date")?;
        let day = NaiveDate::parse_from_str(date.trim(), FORM_DATE_FORMAT)
            .map_err(|source| FormError::InvalidDate {
                value: date.clone(),
                source,
            })?;

        Ok(TimeEntry {
            day,
            start_hour: field("hour")?,
            start_minute: field("minute")?,
            total_hours: field("total-hours")?,
            project: field("project")?,
        })
    }

    /// The fields a page template sees for this entry.
    ///
    /// Produces `StartHour`, `StartMinute`, `Project` and `Hours`.
    pub fn to_model(&self) -> Model {
        Model::new()
            .with("StartHour", &self.start_hour)
            .with("StartMinute", &self.start_minute)
            .with("Project", &self.project)
            .with("Hours", &self.total_hours)
    }
}

/// `Day` is written as a midnight timestamp and read from either a
/// timestamp or a bare date.
mod day_format {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&day.format("%Y-%m-%dT00:00:00"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        let date = text.split('T').next().unwrap_or(&text);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(D::Error::custom)
    }
}
