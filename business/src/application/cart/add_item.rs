use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::voucher::services::VoucherDiscountService;

pub struct AddCartItemUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub discounts: Arc<dyn VoucherDiscountService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartItem, CartError> {
        let quantity = match params.quantity {
            q if q < 0 => return Err(CartError::InvalidQuantity),
            0 => 1,
            q => q,
        };

        self.logger.info(&format!(
            "Adding {} x product {} to cart of user {}",
            quantity, params.product_id, params.user_id
        ));

        let mut tx = self.unit_of_work.begin().await?;

        let fresh = Cart::new(params.user_id);
        let mut cart = tx.find_or_create_cart(&fresh).await?;
        if cart.id == fresh.id {
            self.logger
                .info(&format!("Created cart {} for user {}", cart.id, params.user_id));
        }

        let mut product = tx
            .get_product_for_update(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let available = product.quantity;
        product.reserve(quantity).map_err(|e| match e {
            ProductError::InsufficientStock => {
                self.logger.warn(&format!(
                    "Product {} has {} units left, {} requested",
                    params.product_id, available, quantity
                ));
                CartError::InsufficientStock
            }
            _ => CartError::InvalidQuantity,
        })?;

        let unit_price = self.discounts.discounted_price(&product, Utc::now()).await?;
        let cart_id = cart.id;
        let item = cart
            .add_item(product.id, quantity, unit_price)
            .inspect_err(|_| {
                self.logger.warn(&format!(
                    "Adding {} x product {} would exceed cart {} limits",
                    quantity, params.product_id, cart_id
                ))
            })?;

        tx.update_product_quantity(&product).await?;
        tx.save_item(&item).await?;
        tx.save_cart(&cart).await?;
        tx.commit().await?;

        self.logger.info(&format!(
            "Cart {} now holds {} x product {}, total {}",
            cart.id, item.quantity, item.product_id, cart.total_price
        ));
        Ok(item)
    }
}
