use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

use crate::money::from_numeric;

pub const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category_id, voucher_code, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub category_id: Option<Uuid>,
    pub voucher_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product::from_repository(
            self.id,
            self.name,
            self.description,
            from_numeric(&self.price)?,
            self.quantity,
            self.category_id,
            self.voucher_code,
            self.created_at,
            self.updated_at,
        ))
    }
}
