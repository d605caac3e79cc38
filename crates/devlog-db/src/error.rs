//! Storage errors.

use devlog_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A query ran but a column could not be decoded into its domain type.
    #[error("bad row data: {0}")]
    Query(String),

    #[error("schema migration {0}")]
    Migration(String),

    /// A query that always yields a row yielded none.
    #[error("query returned no rows")]
    NoResult,

    /// The write would break a uniqueness rule, e.g. a second log for one date.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The acting manager does not manage the record's developer.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("libsql: {0}")]
    LibSql(#[from] libsql::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Collapses storage failures at the `LogStore` seam. Validation and
/// permission errors keep their kind; everything else becomes `Other`.
impl From<DatabaseError> for CoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Core(inner) => inner,
            DatabaseError::Forbidden(reason) => Self::Forbidden(reason),
            other => Self::Other(anyhow::Error::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_keeps_its_kind_across_the_seam() {
        let core: CoreError = DatabaseError::Forbidden("dev-1 is not on your team".into()).into();
        assert!(matches!(core, CoreError::Forbidden(ref r) if r.contains("dev-1")));
    }

    #[test]
    fn validation_is_unwrapped() {
        let core: CoreError = DatabaseError::Core(CoreError::Validation("bad".into())).into();
        assert!(matches!(core, CoreError::Validation(_)));
    }

    #[test]
    fn other_failures_become_opaque() {
        let core: CoreError = DatabaseError::NoResult.into();
        assert_eq!(core.to_string(), "query returned no rows");
    }
}
