use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartUnitOfWork;
use crate::domain::cart::use_cases::delete_item::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub unit_of_work: Arc<dyn CartUnitOfWork>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<CartItem, CartError> {
        self.logger.info(&format!(
            "Deleting item {} for user {}",
            params.item_id, params.user_id
        ));

        let mut tx = self.unit_of_work.begin().await?;

        let mut cart = tx
            .find_cart_by_user(&params.user_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;
        let item = cart.remove_item(params.item_id)?;

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
        tx.save_cart(&cart).await?;
        tx.commit().await?;

        self.logger.info(&format!(
            "Released {} units of product {}",
            item.quantity, item.product_id
        ));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::shared::value_objects::{Money, UserId};
    use crate::test_utils::{MockCartTx, mock_logger, product_with_stock, unit_of_work};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_item_and_restore_full_quantity() {
        let user_id = UserId::generate();
        let mut cart = Cart::new(user_id);
        let keep = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(700)).unwrap();
        let item = cart.add_item(Uuid::new_v4(), 4, Money::from_cents(250)).unwrap();
        let item_id = item.id;
        let keep_id = keep.id;

        let mut tx = MockCartTx::new();
        tx.expect_find_cart_by_user()
            .return_once(move |_| Ok(Some(cart)));
        tx.expect_get_product_for_update()
            .withf(move |id| *id == item.product_id)
            .returning(|id| Ok(product_with_stock(id, 250, 6)));
        tx.expect_update_product_quantity()
            .withf(|p| p.quantity == 10)
            .times(1)
            .returning(|_| Ok(()));
        tx.expect_delete_item()
            .withf(move |id| *id == item_id)
            .times(1)
            .returning(|_| Ok(()));
        tx.expect_save_cart()
            .withf(move |c| {
                c.total_price == Money::from_cents(700)
                    && c.items.len() == 1
                    && c.items[0].id == keep_id
            })
            .times(1)
            .returning(|_| Ok(()));
        tx.expect_commit().times(1).returning(|| Ok(()));

        let use_case = DeleteCartItemUseCaseImpl {
            unit_of_work: unit_of_work(tx),
            logger: mock_logger(),
        };

        let deleted = use_case
            .execute(DeleteCartItemParams { user_id, item_id })
            .await
            .unwrap();

        assert_eq!(deleted.id, item_id);
        assert_eq!(deleted.quantity, 4);
    }

    #[tokio::test]
    async fn should_reject_delete_when_restock_would_overflow_stock() {
        let user_id = UserId::generate();
        let mut cart = Cart::new(user_id);
        let item = cart.add_item(Uuid::new_v4(), 2, Money::from_cents(250)).unwrap();
        let item_id = item.id;

        let mut tx = MockCartTx::new();
        tx.expect_find_cart_by_user()
            .return_once(move |_| Ok(Some(cart)));
        tx.expect_get_product_for_update()
            .returning(|id| Ok(product_with_stock(id, 250, i32::MAX - 1)));
        tx.expect_update_product_quantity().never();
        tx.expect_delete_item().never();
        tx.expect_commit().never();

        let use_case = DeleteCartItemUseCaseImpl {
            unit_of_work: unit_of_work(tx),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartItemParams { user_id, item_id })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityLimitExceeded
        ));
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_item_belongs_elsewhere() {
        let mut tx = MockCartTx::new();
        tx.expect_find_cart_by_user()
            .returning(|user_id| Ok(Some(Cart::new(*user_id))));
        tx.expect_get_product_for_update().never();
        tx.expect_delete_item().never();

        let use_case = DeleteCartItemUseCaseImpl {
            unit_of_work: unit_of_work(tx),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartItemParams {
                user_id: UserId::generate(),
                item_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_roll_back_when_commit_fails() {
        let user_id = UserId::generate();
        let mut cart = Cart::new(user_id);
        let item = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(250)).unwrap();

        let mut tx = MockCartTx::new();
        tx.expect_find_cart_by_user()
            .return_once(move |_| Ok(Some(cart)));
        tx.expect_get_product_for_update()
            .returning(|id| Ok(product_with_stock(id, 250, 0)));
        tx.expect_update_product_quantity().returning(|_| Ok(()));
        tx.expect_delete_item().returning(|_| Ok(()));
        tx.expect_save_cart().returning(|_| Ok(()));
        tx.expect_commit()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = DeleteCartItemUseCaseImpl {
            unit_of_work: unit_of_work(tx),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartItemParams {
                user_id,
                item_id: item.id,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
