//! Repository methods, implemented as `impl LogDb` blocks per entity.

pub mod daily_log;
pub mod developer;
