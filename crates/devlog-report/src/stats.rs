//! Pure aggregate metrics over scoped records.
//!
//! Hour totals are kept unrounded; only presentation rounds to one decimal.

use devlog_core::entities::LogRecord;
use devlog_core::enums::Mood;
use indexmap::IndexMap;

use crate::aggregate::DeveloperGroup;
use crate::error::StatsError;

/// Σ (hours + minutes / 60) over every time entry of every record.
#[must_use]
pub fn total_hours<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> f64 {
    records
        .into_iter()
        .flat_map(|record| &record.time_spent)
        .map(devlog_core::entities::TimeEntry::as_hours)
        .sum()
}

/// Records whose trimmed blocker text is non-empty.
#[must_use]
pub fn blocker_count<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> usize {
    records
        .into_iter()
        .filter(|record| record.has_blocker())
        .count()
}

/// Mood → count in first-seen order. Moods that never occur are absent.
#[must_use]
pub fn mood_histogram<'a>(records: impl IntoIterator<Item = &'a LogRecord>) -> IndexMap<Mood, usize> {
    let mut histogram = IndexMap::new();
    for record in records {
        *histogram.entry(record.mood.clone()).or_insert(0) += 1;
    }
    histogram
}

/// # Errors
///
/// Returns `StatsError::DivisionUndefined` when `developer_count` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn average_logs_per_developer(
    total_logs: usize,
    developer_count: usize,
) -> Result<f64, StatsError> {
    if developer_count == 0 {
        return Err(StatsError::DivisionUndefined { total_logs });
    }
    Ok(total_logs as f64 / developer_count as f64)
}

/// Render a figure (hours, logs per developer) with one decimal place.
#[must_use]
pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Team-wide figures for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStatistics {
    pub developer_count: usize,
    pub total_logs: usize,
    pub total_blockers: usize,
    /// `(display name, hours)` in group order.
    pub hours_per_developer: Vec<(String, f64)>,
    pub mood_histogram: IndexMap<Mood, usize>,
}

impl ReportStatistics {
    #[must_use]
    pub fn compute(groups: &[DeveloperGroup]) -> Self {
        let records = || groups.iter().flat_map(|group| &group.records);
        Self {
            developer_count: groups.len(),
            total_logs: groups.iter().map(DeveloperGroup::log_count).sum(),
            total_blockers: groups.iter().map(|group| group.blocker_count).sum(),
            hours_per_developer: groups
                .iter()
                .map(|group| (group.developer.full_name(), group.total_hours))
                .collect(),
            mood_histogram: mood_histogram(records()),
        }
    }

    /// Average logs per developer, `None` for an empty team. The empty case
    /// is checked here so the division is never attempted.
    #[must_use]
    pub fn average_logs_per_developer(&self) -> Option<f64> {
        (self.developer_count > 0)
            .then(|| average_logs_per_developer(self.total_logs, self.developer_count).ok())
            .flatten()
    }

    /// One decimal place, or `N/A` for an empty team.
    #[must_use]
    pub fn average_display(&self) -> String {
        self.average_logs_per_developer()
            .map_or_else(|| "N/A".to_string(), one_decimal)
    }
}
