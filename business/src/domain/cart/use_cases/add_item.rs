use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub user_id: UserId,
    pub product_id: Uuid,
    /// Units to take; zero means one.
    pub quantity: i32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartItem, CartError>;
}
