use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError> {
        self.logger
            .info(&format!("Clearing cart of user {}", params.user_id));

        let mut tx = self.unit_of_work.begin().await?;
        let Some(mut cart) = tx.find_cart_by_user(&params.user_id).await? else {
            return Ok(0);
        };

        let mut removed = cart.clear();
        // Lock products in a stable order so concurrent clears cannot deadlock.
        removed.sort_by_key(|item| item.product_id);

        for item in &removed {
            let mut product = tx
                .get_product_for_update(item.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ProductNotFound,
                    other => CartError::Repository(other),
                })?;
            product.release(item.quantity).map_err(CartError::from_stock_release)?;
            tx.update_product_quantity(&product).await?;
            tx.delete_item(item.id).await?;
        }

        tx.save_cart(&cart).await?;
        tx.commit().await?;

        self.logger.info(&format!(
            "Cart {} cleared, {} items released",
            cart.id,
            removed.len()
        ));
        Ok(removed.len() as u64)
    }
}
