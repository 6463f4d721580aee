use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    /// Units to take; omitted or 0 means 1
    #[oai(default)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart item unique identifier
    pub id: String,
    pub product_id: String,
    /// Units reserved; 0 once the item has been removed
    pub quantity: i32,
    /// Unit price locked when the product was added, after voucher
    pub price_per_item: String,
    /// quantity × price_per_item
    pub subtotal: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
            price_per_item: item.price_per_item.to_string(),
            subtotal: item.subtotal().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub user_id: String,
    /// Sum of the item subtotals
    pub total_price: String,
    pub items: Vec<CartItemResponse>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            user_id: cart.user_id.to_string(),
            total_price: cart.total_price.to_string(),
            items: cart.items.into_iter().map(Into::into).collect(),
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of items released back to stock
    pub released_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::{Money, UserId};

    #[test]
    fn should_expose_subtotal_and_total_as_decimal_strings() {
        let mut cart = Cart::new(UserId::generate());
        cart.add_item(Uuid::new_v4(), 3, Money::from_cents(1999)).unwrap();
        cart.add_item(Uuid::new_v4(), 1, Money::from_cents(1)).unwrap();

        let response = CartResponse::from(cart);

        assert_eq!(response.total_price, "59.98");
        assert_eq!(response.items[0].price_per_item, "19.99");
        assert_eq!(response.items[0].subtotal, "59.97");
        assert_eq!(response.items[1].subtotal, "0.01");
    }
}
