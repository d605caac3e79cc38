//! Daily log repository: submission, lookup, review, and scoped range reads.

use chrono::{NaiveDate, Utc};
use devlog_core::entities::{LogRecord, TimeEntry};
use devlog_core::enums::Mood;
use devlog_core::ids::PREFIX_LOG;
use devlog_core::store::DateRange;

use crate::LogDb;
use crate::error::DatabaseError;
use crate::helpers::{format_date, get_opt_string, parse_date, parse_datetime, parse_time_spent};

const SELECT_COLS: &str = "id, developer_id, log_date, tasks, time_spent, mood, blockers, \
                           is_reviewed, review_comment, created_at, updated_at";

/// Input for [`LogDb::create_log`].
#[derive(Debug, Clone)]
pub struct NewLog {
    pub developer_id: String,
    pub log_date: NaiveDate,
    pub tasks: String,
    pub time_spent: Vec<TimeEntry>,
    pub mood: Mood,
    pub blockers: Option<String>,
}

fn row_to_log(row: &libsql::Row) -> Result<LogRecord, DatabaseError> {
    let mood = Mood::parse(&row.get::<String>(5)?);
    if !mood.is_recognized() {
        tracing::warn!(mood = mood.as_str(), "unrecognized mood value in daily_logs");
    }
    Ok(LogRecord {
        id: row.get(0)?,
        developer_id: row.get(1)?,
        log_date: parse_date(&row.get::<String>(2)?)?,
        tasks: row.get(3)?,
        time_spent: parse_time_spent(&row.get::<String>(4)?)?,
        mood,
        blockers: get_opt_string(row, 6)?,
        is_reviewed: row.get::<i64>(7)? != 0,
        review_comment: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

async fn collect_logs(mut rows: libsql::Rows) -> Result<Vec<LogRecord>, DatabaseError> {
    let mut logs = Vec::new();
    while let Some(row) = rows.next().await? {
        logs.push(row_to_log(&row)?);
    }
    Ok(logs)
}

impl LogDb {
    /// Submit a daily log. A developer has at most one log per date.
    pub async fn create_log(&self, input: &NewLog) -> Result<LogRecord, DatabaseError> {
        input
            .time_spent
            .iter()
            .try_for_each(TimeEntry::validate)?;

        // Surface a missing owner as NoResult rather than a FK violation.
        self.get_developer(&input.developer_id).await?;

        if self
            .find_log_by_date(&input.developer_id, input.log_date)
            .await?
            .is_some()
        {
            return Err(DatabaseError::Conflict(format!(
                "{} already submitted a log for {}",
                input.developer_id, input.log_date
            )));
        }

        let now = Utc::now();
        let id = self.generate_id(PREFIX_LOG).await?;
        let time_spent =
            serde_json::to_string(&input.time_spent).map_err(|e| DatabaseError::Other(e.into()))?;

        self.conn()
            .execute(
                &format!(
                    "INSERT INTO daily_logs ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
                ),
                libsql::params![
                    id.as_str(),
                    input.developer_id.as_str(),
                    format_date(input.log_date),
                    input.tasks.as_str(),
                    time_spent,
                    input.mood.as_str(),
                    input.blockers.as_deref(),
                    0i64,
                    Option::<&str>::None,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(%id, developer_id = %input.developer_id, date = %input.log_date, "created daily log");

        Ok(LogRecord {
            id,
            developer_id: input.developer_id.clone(),
            log_date: input.log_date,
            tasks: input.tasks.clone(),
            time_spent: input.time_spent.clone(),
            mood: input.mood.clone(),
            blockers: input.blockers.clone(),
            is_reviewed: false,
            review_comment: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_log(&self, id: &str) -> Result<LogRecord, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM daily_logs WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_log(&row)
    }

    /// The log a developer submitted for `date`, if any.
    pub async fn find_log_by_date(
        &self,
        developer_id: &str,
        date: NaiveDate,
    ) -> Result<Option<LogRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM daily_logs WHERE developer_id = ?1 AND log_date = ?2"
                ),
                libsql::params![developer_id, format_date(date)],
            )
            .await?;
        rows.next().await?.map(|row| row_to_log(&row)).transpose()
    }

    /// Mark a log reviewed (or back to pending) on behalf of a manager.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Forbidden` when the log's owner does not report
    /// to `manager_id`, and `DatabaseError::NoResult` when the log is missing.
    pub async fn review_log(
        &self,
        manager_id: &str,
        log_id: &str,
        is_reviewed: bool,
        comment: Option<&str>,
    ) -> Result<LogRecord, DatabaseError> {
        let log = self.get_log(log_id).await?;
        let owner = self.get_developer(&log.developer_id).await?;
        if !owner.reports_to(manager_id) {
            return Err(DatabaseError::Forbidden(format!(
                "{manager_id} does not manage the owner of {log_id}"
            )));
        }

        let now = Utc::now();
        self.conn()
            .execute(
                "UPDATE daily_logs SET is_reviewed = ?1, review_comment = ?2, updated_at = ?3
                 WHERE id = ?4",
                libsql::params![i64::from(is_reviewed), comment, now.to_rfc3339(), log_id],
            )
            .await?;

        tracing::debug!(log_id, manager_id, is_reviewed, "reviewed daily log");
        self.get_log(log_id).await
    }

    /// Logs owned by any of `developer_ids`, optionally restricted to an
    /// inclusive date range, ordered by date ascending then submission order.
    pub async fn fetch_records_in(
        &self,
        developer_ids: &[String],
        range: Option<DateRange>,
    ) -> Result<Vec<LogRecord>, DatabaseError> {
        if developer_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut params: Vec<libsql::Value> = Vec::with_capacity(developer_ids.len() + 2);
        let placeholders = developer_ids
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                params.push(id.clone().into());
                format!("?{}", idx + 1)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql =
            format!("SELECT {SELECT_COLS} FROM daily_logs WHERE developer_id IN ({placeholders})");
        if let Some(range) = range {
            let idx = params.len();
            sql.push_str(&format!(
                " AND log_date >= ?{} AND log_date <= ?{}",
                idx + 1,
                idx + 2
            ));
            params.push(format_date(range.start).into());
            params.push(format_date(range.end).into());
        }
        sql.push_str(" ORDER BY log_date ASC, rowid ASC");

        let rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let logs = collect_logs(rows).await?;
        tracing::debug!(
            developers = developer_ids.len(),
            records = logs.len(),
            "fetched daily logs"
        );
        Ok(logs)
    }
}
