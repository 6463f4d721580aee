use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct UpdateCategoryParams {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError>;
}
