use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct CreateCategoryParams {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError>;
}
