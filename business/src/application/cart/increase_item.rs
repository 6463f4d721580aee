use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::increase_item::{
    IncreaseCartItemParams, IncreaseCartItemUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct IncreaseCartItemUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncreaseCartItemUseCase for IncreaseCartItemUseCaseImpl {
    async fn execute(&self, params: IncreaseCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Increasing item {} for user {}",
            params.item_id, params.user_id
        ));

        let mut tx = self.unit_of_work.begin().await?;

        let mut cart = tx
            .find_cart_by_user(&params.user_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;
        let product_id = cart
            .item(params.item_id)
            .map(|i| i.product_id)
            .ok_or(CartError::ItemNotFound)?;

        let mut product = tx
            .get_product_for_update(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;
        if product.reserve(1).is_err() {
            self.logger
                .warn(&format!("Product {} is out of stock", product_id));
            return Err(CartError::InsufficientStock);
        }

        let item = cart.change_item_quantity(params.item_id, 1)?;
        tx.update_product_quantity(&product).await?;
        tx.save_item(&item).await?;
        tx.save_cart(&cart).await?;
        tx.commit().await?;

        Ok(item)
    }
}
