use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub parent_category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(
            self.id,
            self.name,
            self.parent_category_id,
            self.created_at,
            self.updated_at,
        )
    }
}
