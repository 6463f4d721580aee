use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::cart::repository::{CartTransaction, CartUnitOfWork};
use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartEntity, CartItemEntity};
use crate::errors::map_sqlx_error;
use crate::money::to_numeric;
use crate::product::entity::{PRODUCT_COLUMNS, ProductEntity};

pub struct CartUnitOfWorkPostgres {
    pool: PgPool,
}

impl CartUnitOfWorkPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartUnitOfWork for CartUnitOfWorkPostgres {
    async fn begin(&self) -> Result<Box<dyn CartTransaction>, RepositoryError> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(CartTransactionPostgres { tx: Some(tx) }))
    }
}

/// Cart repository operations sharing one Postgres transaction.
///
/// Rows read here are locked with `FOR UPDATE`, so concurrent mutations of
/// the same cart or product wait for this transaction to finish.
pub struct CartTransactionPostgres {
    tx: Option<Transaction<'static, Postgres>>,
}

impl CartTransactionPostgres {
    fn conn(&mut self) -> Result<&mut PgConnection, RepositoryError> {
        self.tx.as_deref_mut().ok_or_else(|| {
            tracing::error!("Cart transaction used after commit");
            RepositoryError::Persistence
        })
    }
}

#[async_trait]
impl CartTransaction for CartTransactionPostgres {
    async fn find_cart_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<Cart>, RepositoryError> {
        let conn = self.conn()?;

        let Some(cart) = sqlx::query_as::<_, CartEntity>(
            "SELECT id, user_id, total_price, created_at, updated_at FROM carts WHERE user_id = $1 FOR UPDATE",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx_error)?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, cart_id, product_id, quantity, price_per_item, created_at, updated_at FROM cart_items WHERE cart_id = $1 ORDER BY created_at",
        )
        .bind(cart.id)
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

        cart.into_domain(items).map(Some)
    }

    async fn find_or_create_cart(&mut self, fresh: &Cart) -> Result<Cart, RepositoryError> {
        // A concurrent first insert for the same user blocks here until it
        // commits, then this one becomes a no-op.
        sqlx::query(
            r#"INSERT INTO carts (id, user_id, total_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO NOTHING"#,
        )
        .bind(fresh.id)
        .bind(fresh.user_id.as_uuid())
        .bind(to_numeric(fresh.total_price))
        .bind(fresh.created_at)
        .bind(fresh.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx_error)?;

        self.find_cart_by_user(&fresh.user_id).await?.ok_or_else(|| {
            tracing::error!("Cart for user {} vanished after insert", fresh.user_id);
            RepositoryError::Persistence
        })
    }

    async fn save_cart(&mut self, cart: &Cart) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO carts (id, user_id, total_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                total_price = EXCLUDED.total_price,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(cart.id)
        .bind(cart.user_id.as_uuid())
        .bind(to_numeric(cart.total_price))
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn get_product_for_update(&mut self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn update_product_quantity(&mut self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET quantity = $2, updated_at = $3 WHERE id = $1")
            .bind(product.id)
            .bind(product.quantity)
            .bind(product.updated_at)
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn save_item(&mut self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (id, cart_id, product_id, quantity, price_per_item, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                quantity = EXCLUDED.quantity,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(item.id)
        .bind(item.cart_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(to_numeric(item.price_per_item))
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete_item(&mut self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(self.conn()?)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepositoryError> {
        let tx = self.tx.take().ok_or_else(|| {
            tracing::error!("Cart transaction committed twice");
            RepositoryError::Persistence
        })?;
        tx.commit().await.map_err(map_sqlx_error)
    }
}
