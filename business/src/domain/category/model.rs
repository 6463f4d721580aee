use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CategoryError;

/// Node of the category tree. Root categories have no parent.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: String, parent_id: Option<Uuid>) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            parent_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        parent_id: Option<Uuid>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            parent_id,
            created_at,
            updated_at,
        }
    }

    pub fn is_main(&self) -> bool {
        self.parent_id.is_none()
    }
}
