use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteCartItemParams {
    pub user_id: UserId,
    pub item_id: Uuid,
}

#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<CartItem, CartError>;
}
