use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Getting cart of user {}", params.user_id));

        let mut tx = self.unit_of_work.begin().await?;
        let cart = tx.find_cart_by_user(&params.user_id).await?;
        tx.commit().await?;

        // Users without a cart see an empty one; the row is only created on first add.
        Ok(cart.unwrap_or_else(|| Cart::new(params.user_id)))
    }
}
