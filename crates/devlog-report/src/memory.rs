//! In-memory [`LogStore`], for tests and embedding without a database.

use devlog_core::entities::{Developer, LogRecord};
use devlog_core::errors::CoreError;
use devlog_core::store::{DateRange, LogStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    developers: Vec<Developer>,
    records: Vec<LogRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(developers: Vec<Developer>, records: Vec<LogRecord>) -> Self {
        Self {
            developers,
            records,
        }
    }

    #[must_use]
    pub fn with_developer(mut self, developer: Developer) -> Self {
        self.developers.push(developer);
        self
    }

    #[must_use]
    pub fn with_record(mut self, record: LogRecord) -> Self {
        self.records.push(record);
        self
    }
}

impl LogStore for MemoryStore {
    async fn fetch_developers(&self, manager_id: &str) -> Result<Vec<Developer>, CoreError> {
        Ok(self
            .developers
            .iter()
            .filter(|dev| dev.reports_to(manager_id))
            .cloned()
            .collect())
    }

    async fn fetch_records(
        &self,
        developer_ids: &[String],
        range: Option<DateRange>,
    ) -> Result<Vec<LogRecord>, CoreError> {
        let mut records: Vec<LogRecord> = self
            .records
            .iter()
            .filter(|record| developer_ids.contains(&record.developer_id))
            .filter(|record| range.is_none_or(|range| range.contains(record.log_date)))
            .cloned()
            .collect();
        records.sort_by_key(|record| record.log_date);
        Ok(records)
    }
}
