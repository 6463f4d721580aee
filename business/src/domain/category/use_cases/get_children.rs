use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

pub struct GetCategoryChildrenParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetCategoryChildrenUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCategoryChildrenParams,
    ) -> Result<Vec<Category>, CategoryError>;
}
