use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::money::from_numeric;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price_per_item: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self, items: Vec<CartItemEntity>) -> Result<Cart, RepositoryError> {
        let items = items
            .into_iter()
            .map(CartItemEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            from_numeric(&self.total_price)?,
            items,
            self.created_at,
            self.updated_at,
        ))
    }
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        Ok(CartItem::from_repository(
            self.id,
            self.cart_id,
            self.product_id,
            self.quantity,
            from_numeric(&self.price_per_item)?,
            self.created_at,
            self.updated_at,
        ))
    }
}
