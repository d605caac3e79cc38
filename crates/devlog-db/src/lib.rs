//! # devlog-db
//!
//! libSQL storage for devlog: developer records with their manager
//! back-references, and one daily log per developer per date.
//!
//! `LogDb` also implements [`devlog_core::store::LogStore`], which is the only
//! surface the report engine sees.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Handle over one libSQL connection holding developers and daily logs.
pub struct LogDb {
    /// Kept alive for the lifetime of `conn`.
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LogDb {
    /// Open (or create) the database file at `path` and bring its schema up
    /// to date. `":memory:"` gives a throwaway database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened, foreign keys
    /// cannot be enabled, or a migration fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Manager back-references rely on FK enforcement, which SQLite scopes per connection.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("enable foreign keys: {e}")))?;

        let log_db = Self { db, conn };
        log_db.run_migrations().await?;
        tracing::debug!(path, "opened devlog database");
        Ok(log_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// New record id of the form `<prefix>-<8 hex chars>`, e.g. `dev-0c9e41aa`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or yields no row.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
