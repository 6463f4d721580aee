use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::category::model::Category;

#[derive(Debug, Clone, Object)]
pub struct CategoryRequest {
    /// Category name (cannot be empty)
    pub name: String,
    /// Parent category; omit for a main category
    #[oai(skip_serializing_if_is_none)]
    pub parent_category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub parent_category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            parent_category_id: category.parent_id.map(|id| id.to_string()),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
