//! Record filtering over an access scope.
//!
//! A [`LogFilter`] is turned into a list of independent predicates which are
//! folded with AND. The scope predicate is always first, so no combination of
//! options can widen what a manager sees.

use chrono::NaiveDate;
use devlog_core::entities::LogRecord;
use devlog_core::enums::DateOrder;
use devlog_core::errors::CoreError;
use devlog_core::store::{DateRange, LogStore};

use crate::scope::{self, AccessScope};

/// Optional narrowing of a scoped record listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Exact calendar date.
    pub date: Option<NaiveDate>,
    /// Single developer; ignored (empty result) when outside the scope.
    pub developer_id: Option<String>,
    /// `Some(true)` keeps only records with blocker text. `Some(false)` and
    /// `None` apply no blocker predicate.
    pub has_blockers: Option<bool>,
    pub order: DateOrder,
}

impl LogFilter {
    #[must_use]
    pub const fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn for_developer(mut self, developer_id: impl Into<String>) -> Self {
        self.developer_id = Some(developer_id.into());
        self
    }

    #[must_use]
    pub const fn with_blockers(mut self, has_blockers: bool) -> Self {
        self.has_blockers = Some(has_blockers);
        self
    }

    #[must_use]
    pub const fn ordered(mut self, order: DateOrder) -> Self {
        self.order = order;
        self
    }
}

type Predicate<'a> = Box<dyn Fn(&LogRecord) -> bool + 'a>;

fn predicates<'a>(scope: &'a AccessScope, filter: &'a LogFilter) -> Vec<Predicate<'a>> {
    let in_scope: Predicate<'a> =
        Box::new(|record: &LogRecord| scope.contains(&record.developer_id));
    let on_date = filter
        .date
        .map(|date| Box::new(move |record: &LogRecord| record.log_date == date) as Predicate<'a>);
    let by_developer = filter.developer_id.as_deref().map(|developer_id| {
        Box::new(move |record: &LogRecord| record.developer_id == developer_id) as Predicate<'a>
    });
    let blocked = (filter.has_blockers == Some(true))
        .then(|| Box::new(LogRecord::has_blocker) as Predicate<'a>);

    [Some(in_scope), on_date, by_developer, blocked]
        .into_iter()
        .flatten()
        .collect()
}

/// Apply `filter` to `records` within `scope`, then sort by date.
///
/// Never fails; an unauthorized developer simply yields nothing. Sorting is
/// stable, so records sharing a date keep their incoming order.
#[must_use]
pub fn filter(records: Vec<LogRecord>, scope: &AccessScope, filter: &LogFilter) -> Vec<LogRecord> {
    let predicates = predicates(scope, filter);
    let mut kept: Vec<LogRecord> = records
        .into_iter()
        .filter(|record| predicates.iter().all(|keep| keep(record)))
        .collect();

    match filter.order {
        DateOrder::Ascending => kept.sort_by_key(|record| record.log_date),
        DateOrder::Descending => kept.sort_by(|a, b| b.log_date.cmp(&a.log_date)),
    }
    kept
}

/// Team view for a manager: resolve the scope, fetch its records (narrowed to
/// the filter's date or developer when given) and filter them.
///
/// # Errors
///
/// Propagates the store's `CoreError`.
pub async fn team_logs<S: LogStore>(
    store: &S,
    manager_id: &str,
    log_filter: &LogFilter,
) -> Result<Vec<LogRecord>, CoreError> {
    let scope = scope::resolve(store, manager_id).await?;

    let ids = match log_filter.developer_id.as_deref() {
        Some(developer_id) if scope.contains(developer_id) => vec![developer_id.to_string()],
        Some(developer_id) => {
            tracing::debug!(manager_id, developer_id, "developer outside scope");
            return Ok(Vec::new());
        }
        None => scope.developer_ids(),
    };
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let range = log_filter.date.map(DateRange::single);
    let records = store.fetch_records(&ids, range).await?;
    let logs = filter(records, &scope, log_filter);
    tracing::debug!(manager_id, logs = logs.len(), "filtered team logs");
    Ok(logs)
}
