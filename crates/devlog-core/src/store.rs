//! The persistence contract consumed by the report engine.
//!
//! The report engine never decides how records are stored. It receives
//! already-fetched collections through this trait; `devlog-db` provides the
//! libSQL implementation and `devlog-report` an in-memory one.

use std::future::Future;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Developer, LogRecord};
use crate::errors::CoreError;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::Validation(format!(
                "date range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one date.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Read access to developer and log records.
///
/// Implementations must return records ordered by `log_date` ascending.
pub trait LogStore: Send + Sync {
    /// All developers whose manager reference equals `manager_id`.
    fn fetch_developers(
        &self,
        manager_id: &str,
    ) -> impl Future<Output = Result<Vec<Developer>, CoreError>> + Send;

    /// Records owned by any of `developer_ids`, restricted to `range` when given.
    fn fetch_records(
        &self,
        developer_ids: &[String],
        range: Option<DateRange>,
    ) -> impl Future<Output = Result<Vec<LogRecord>, CoreError>> + Send;
}

impl<T: LogStore + ?Sized> LogStore for &T {
    fn fetch_developers(
        &self,
        manager_id: &str,
    ) -> impl Future<Output = Result<Vec<Developer>, CoreError>> + Send {
        (**self).fetch_developers(manager_id)
    }

    fn fetch_records(
        &self,
        developer_ids: &[String],
        range: Option<DateRange>,
    ) -> impl Future<Output = Result<Vec<LogRecord>, CoreError>> + Send {
        (**self).fetch_records(developer_ids, range)
    }
}
