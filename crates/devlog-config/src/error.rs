//! Errors raised while loading or validating `DevlogConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be read or did not match the expected shape.
    #[error("failed to load devlog configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A field parsed but cannot be used (e.g. a zero chart size).
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
