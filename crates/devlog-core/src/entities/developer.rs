use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A person who submits daily logs. `manager_id` points at another developer
/// record with the manager role; a developer may have no manager.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Developer {
    /// Display name used in reports: first and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub fn reports_to(&self, manager_id: &str) -> bool {
        self.manager_id.as_deref() == Some(manager_id)
    }
}
