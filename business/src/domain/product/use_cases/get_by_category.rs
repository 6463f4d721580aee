use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByCategoryParams {
    pub category_id: Uuid,
}

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}
