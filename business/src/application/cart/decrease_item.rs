use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::decrease_item::{
    DecreaseCartItemParams, DecreaseCartItemUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DecreaseCartItemUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecreaseCartItemUseCase for DecreaseCartItemUseCaseImpl {
    async fn execute(&self, params: DecreaseCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Decreasing item {} for user {}",
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

        let item = cart.change_item_quantity(params.item_id, -1)?;
        product.release(1).map_err(CartError::from_stock_release)?;
        tx.update_product_quantity(&product).await?;

        if item.quantity == 0 {
            tx.delete_item(item.id).await?;
            self.logger
                .info(&format!("Item {} removed from cart {}", item.id, cart.id));
        } else {
            tx.save_item(&item).await?;
        }
        tx.save_cart(&cart).await?;
        tx.commit().await?;

        Ok(item)
    }
}
