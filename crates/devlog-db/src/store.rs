//! `LogStore` implementation over libSQL.

use devlog_core::entities::{Developer, LogRecord};
use devlog_core::errors::CoreError;
use devlog_core::store::{DateRange, LogStore};

use crate::LogDb;

impl LogStore for LogDb {
    async fn fetch_developers(&self, manager_id: &str) -> Result<Vec<Developer>, CoreError> {
        Ok(self.list_developers(manager_id).await?)
    }

    async fn fetch_records(
        &self,
        developer_ids: &[String],
        range: Option<DateRange>,
    ) -> Result<Vec<LogRecord>, CoreError> {
        Ok(self.fetch_records_in(developer_ids, range).await?)
    }
}
