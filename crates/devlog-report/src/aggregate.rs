//! Per-developer grouping of scoped records.

use std::collections::HashMap;

use devlog_core::entities::{Developer, LogRecord};

use crate::stats;

/// One developer with their records in date order and derived totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DeveloperGroup {
    pub developer: Developer,
    pub records: Vec<LogRecord>,
    pub total_hours: f64,
    pub blocker_count: usize,
}

impl DeveloperGroup {
    /// Sorts `records` by date ascending (stable) and derives the totals.
    #[must_use]
    pub fn new(developer: Developer, mut records: Vec<LogRecord>) -> Self {
        records.sort_by_key(|record| record.log_date);
        let total_hours = stats::total_hours(&records);
        let blocker_count = stats::blocker_count(&records);
        Self {
            developer,
            records,
            total_hours,
            blocker_count,
        }
    }

    #[must_use]
    pub fn log_count(&self) -> usize {
        self.records.len()
    }

    /// Records with blocker text, in date order.
    pub fn blocked_records(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter().filter(|record| record.has_blocker())
    }
}

/// Partition `records` by owner into one group per developer, in the order
/// `developers` is given. Developers without records still get a group;
/// records owned by anyone else are dropped.
#[must_use]
pub fn group(records: Vec<LogRecord>, developers: &[Developer]) -> Vec<DeveloperGroup> {
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(developers.len());
    for (idx, developer) in developers.iter().enumerate() {
        slots.entry(developer.id.as_str()).or_insert(idx);
    }

    let mut buckets: Vec<Vec<LogRecord>> = vec![Vec::new(); developers.len()];
    let mut dropped = 0usize;
    for record in records {
        match slots.get(record.developer_id.as_str()) {
            Some(&idx) => buckets[idx].push(record),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "ignored records owned by developers outside the group list");
    }

    developers
        .iter()
        .zip(buckets)
        .enumerate()
        .filter(|(idx, (developer, _))| slots.get(developer.id.as_str()) == Some(idx))
        .map(|(_, (developer, records))| DeveloperGroup::new(developer.clone(), records))
        .collect()
}
