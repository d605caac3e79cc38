//! Schema migrations, embedded at compile time and applied on every open.
//!
//! Each script is idempotent (`IF NOT EXISTS` throughout), so re-running the
//! whole list against an existing database is a no-op.

use crate::LogDb;
use crate::error::DatabaseError;

/// `(name, sql)` in application order.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    include_str!("../migrations/001_initial.sql"),
)];

impl LogDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn()
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::trace!(migration = name, "applied migration");
        }
        Ok(())
    }
}
