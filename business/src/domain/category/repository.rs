use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Category;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
    /// Categories without a parent.
    async fn get_main_categories(&self) -> Result<Vec<Category>, RepositoryError>;
    /// Direct children of the given category.
    async fn get_children(&self, parent_id: Uuid) -> Result<Vec<Category>, RepositoryError>;
    async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
