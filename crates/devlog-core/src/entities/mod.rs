//! Entity structs for devlog domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod developer;
mod log_record;

pub use developer::Developer;
pub use log_record::{LogRecord, TimeEntry};
