use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// List price as a decimal string, e.g. "19.99"
    pub price: String,
    /// Units in stock
    pub quantity: i32,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<Uuid>,
    /// Voucher applied when the product is added to a cart
    #[oai(skip_serializing_if_is_none)]
    pub voucher_code: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// List price, before any voucher
    pub price: String,
    /// Units available for reservation
    pub quantity: i32,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub voucher_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            quantity: product.quantity,
            category_id: product.category_id.map(|id| id.to_string()),
            voucher_code: product.voucher_code,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
