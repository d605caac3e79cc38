//! Error type shared across crate boundaries.
//!
//! Storage and report crates keep their own error enums and convert into
//! [`CoreError`] where they meet `LogStore`, so report code never names a
//! storage error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{entity_type} '{id}' does not exist")]
    NotFound { entity_type: String, id: String },

    /// The acting user has no authority over the record.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Input outside an allowed range or format.
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
