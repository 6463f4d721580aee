use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

#[async_trait]
pub trait GetMainCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError>;
}
