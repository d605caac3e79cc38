use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Mood;
use crate::errors::CoreError;

/// Time spent on one task within a daily log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub task_id: String,
    pub hours: u8,
    pub minutes: u8,
}

impl TimeEntry {
    pub const MAX_HOURS: u8 = 24;
    pub const MAX_MINUTES: u8 = 59;

    /// Fractional hours contributed by this entry. Minutes are not rounded.
    #[must_use]
    pub fn as_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if hours exceed 24 or minutes exceed 59.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.hours > Self::MAX_HOURS {
            return Err(CoreError::Validation(format!(
                "time entry '{}': hours must be 0..={}, got {}",
                self.task_id,
                Self::MAX_HOURS,
                self.hours
            )));
        }
        if self.minutes > Self::MAX_MINUTES {
            return Err(CoreError::Validation(format!(
                "time entry '{}': minutes must be 0..={}, got {}",
                self.task_id,
                Self::MAX_MINUTES,
                self.minutes
            )));
        }
        Ok(())
    }
}

/// Renders as `XhYm`, e.g. `2h30m`.
impl fmt::Display for TimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{}m", self.hours, self.minutes)
    }
}

/// One developer's structured activity entry for one calendar date.
///
/// Immutable once fetched. A developer has at most one record per date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogRecord {
    pub id: String,
    pub developer_id: String,
    pub log_date: NaiveDate,
    /// Free text from the rich-text editor; may contain markup and is never re-encoded.
    pub tasks: String,
    pub time_spent: Vec<TimeEntry>,
    #[schemars(with = "String")]
    pub mood: Mood,
    pub blockers: Option<String>,
    pub is_reviewed: bool,
    pub review_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LogRecord {
    /// Blocker text with surrounding whitespace removed, if any remains.
    #[must_use]
    pub fn blocker_text(&self) -> Option<&str> {
        self.blockers
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Whether the record reports an unresolved blocker (trimmed text is non-empty).
    #[must_use]
    pub fn has_blocker(&self) -> bool {
        self.blocker_text().is_some()
    }

    /// Time entries rendered as `XhYm` and joined by `", "`.
    #[must_use]
    pub fn time_spent_display(&self) -> String {
        self.time_spent
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.is_reviewed { "Reviewed" } else { "Pending" }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if any time entry is out of range.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.time_spent.iter().try_for_each(TimeEntry::validate)
    }
}
