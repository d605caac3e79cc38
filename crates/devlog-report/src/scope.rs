//! Manager → subordinate authorization scope.
//!
//! The scope is the only authorization boundary for team views and reports:
//! a record whose owner is not in the scope never reaches any output.

use std::collections::BTreeSet;

use devlog_core::entities::Developer;
use devlog_core::errors::CoreError;
use devlog_core::store::LogStore;

/// Developers a manager may view for a single request. Built fresh each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessScope {
    manager_id: String,
    developers: Vec<Developer>,
    ids: BTreeSet<String>,
}

impl AccessScope {
    /// Build a scope from a candidate list. Developers that do not report to
    /// `manager_id` and repeated ids are left out; store order is otherwise kept.
    #[must_use]
    pub fn new(manager_id: &str, candidates: Vec<Developer>) -> Self {
        let mut ids = BTreeSet::new();
        let developers: Vec<Developer> = candidates
            .into_iter()
            .filter(|dev| dev.reports_to(manager_id) && ids.insert(dev.id.clone()))
            .collect();
        Self {
            manager_id: manager_id.to_string(),
            developers,
            ids,
        }
    }

    #[must_use]
    pub fn manager_id(&self) -> &str {
        &self.manager_id
    }

    /// Developers in store order.
    #[must_use]
    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    /// Developer ids in store order.
    #[must_use]
    pub fn developer_ids(&self) -> Vec<String> {
        self.developers.iter().map(|dev| dev.id.clone()).collect()
    }

    #[must_use]
    pub fn contains(&self, developer_id: &str) -> bool {
        self.ids.contains(developer_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.developers.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.developers.len()
    }
}

/// Resolve the scope of `manager_id`. A manager with no reports gets an
/// empty scope, not an error.
///
/// # Errors
///
/// Propagates the store's `CoreError`.
pub async fn resolve<S: LogStore>(store: &S, manager_id: &str) -> Result<AccessScope, CoreError> {
    let developers = store.fetch_developers(manager_id).await?;
    let scope = AccessScope::new(manager_id, developers);
    tracing::debug!(manager_id, developers = scope.len(), "resolved access scope");
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use devlog_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    fn dev(id: &str, manager: Option<&str>) -> Developer {
        Developer {
            id: id.into(),
            first_name: id.into(),
            last_name: "Test".into(),
            email: format!("{id}@example.com"),
            role: Role::Developer,
            manager_id: manager.map(String::from),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn keeps_only_direct_reports_in_order() {
        let scope = AccessScope::new(
            "m1",
            vec![dev("b", Some("m1")), dev("x", Some("m2")), dev("a", Some("m1"))],
        );
        assert_eq!(scope.developer_ids(), vec!["b".to_string(), "a".to_string()]);
        assert!(scope.contains("a"));
        assert!(!scope.contains("x"));
    }

    #[test]
    fn duplicate_candidates_collapse() {
        let scope = AccessScope::new("m1", vec![dev("a", Some("m1")), dev("a", Some("m1"))]);
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn empty_scope_is_valid() {
        let scope = AccessScope::new("m1", vec![]);
        assert!(scope.is_empty());
        assert_eq!(scope.manager_id(), "m1");
    }
}
