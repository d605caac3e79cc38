//! CLI response types returned as JSON by `devlog` commands.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LogRecord;
use crate::enums::ReportFormat;

/// Response from `devlog log team`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamLogsResponse {
    pub manager_id: String,
    pub count: usize,
    pub logs: Vec<LogRecord>,
}

/// Response from `devlog report` once the artifact has been written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportWrittenResponse {
    pub manager_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub format: ReportFormat,
    pub content_type: String,
    pub filename: String,
    pub path: String,
    pub bytes: usize,
}
