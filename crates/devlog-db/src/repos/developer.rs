//! Developer repository: create, lookup, and manager-scoped listing.

use chrono::Utc;
use devlog_core::entities::Developer;
use devlog_core::enums::Role;
use devlog_core::ids::PREFIX_DEVELOPER;

use crate::LogDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};

const SELECT_COLS: &str = "id, first_name, last_name, email, role, manager_id, created_at";

/// Input for [`LogDb::create_developer`].
#[derive(Debug, Clone)]
pub struct NewDeveloper {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub manager_id: Option<String>,
}

fn row_to_developer(row: &libsql::Row) -> Result<Developer, DatabaseError> {
    Ok(Developer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        role: parse_enum(&row.get::<String>(4)?)?,
        manager_id: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl LogDb {
    pub async fn create_developer(&self, input: &NewDeveloper) -> Result<Developer, DatabaseError> {
        if let Some(manager_id) = input.manager_id.as_deref() {
            let manager = self.get_developer(manager_id).await?;
            if manager.role != Role::Manager {
                return Err(DatabaseError::Conflict(format!(
                    "{manager_id} is not a manager"
                )));
            }
        }

        let now = Utc::now();
        let id = self.generate_id(PREFIX_DEVELOPER).await?;

        self.conn()
            .execute(
                &format!("INSERT INTO developers ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    input.first_name.as_str(),
                    input.last_name.as_str(),
                    input.email.as_str(),
                    input.role.as_str(),
                    input.manager_id.as_deref(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Developer {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            role: input.role,
            manager_id: input.manager_id.clone(),
            created_at: now,
        })
    }

    pub async fn get_developer(&self, id: &str) -> Result<Developer, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM developers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_developer(&row)
    }

    /// Developers reporting to `manager_id`, in insertion order.
    pub async fn list_developers(&self, manager_id: &str) -> Result<Vec<Developer>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM developers WHERE manager_id = ?1 ORDER BY rowid"
                ),
                [manager_id],
            )
            .await?;

        let mut developers = Vec::new();
        while let Some(row) = rows.next().await? {
            developers.push(row_to_developer(&row)?);
        }
        Ok(developers)
    }
}
