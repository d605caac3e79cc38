//! ID prefix constants.
//!
//! IDs are generated by the store as `<prefix>-<8 hex chars>`, e.g. `dev-a3f8b2c1`.

pub const PREFIX_DEVELOPER: &str = "dev";
pub const PREFIX_LOG: &str = "log";

/// Every prefix in use, for exhaustive ID tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_DEVELOPER, PREFIX_LOG];
