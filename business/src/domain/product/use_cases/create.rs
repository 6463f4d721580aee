use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Money;

pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i32,
    pub category_id: Option<Uuid>,
    pub voucher_code: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
