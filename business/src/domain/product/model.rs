use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::value_objects::Money;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    /// Units available for reservation.
    pub quantity: i32,
    pub category_id: Option<Uuid>,
    pub voucher_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i32,
    pub category_id: Option<Uuid>,
    pub voucher_code: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            quantity: props.quantity,
            category_id: props.category_id,
            voucher_code: normalize_code(props.voucher_code),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: Money,
        quantity: i32,
        category_id: Option<Uuid>,
        voucher_code: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            quantity,
            category_id,
            voucher_code,
            created_at,
            updated_at,
        }
    }

    /// Replaces every editable field, keeping identity and creation time.
    pub fn replace(&self, props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props)?;

        Ok(Self {
            id: self.id,
            name: props.name,
            description: props.description,
            price: props.price,
            quantity: props.quantity,
            category_id: props.category_id,
            voucher_code: normalize_code(props.voucher_code),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// Takes `quantity` units out of stock.
    pub fn reserve(&mut self, quantity: i32) -> Result<(), ProductError> {
        if quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }
        if self.quantity < quantity {
            return Err(ProductError::InsufficientStock);
        }
        self.quantity -= quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Puts `quantity` units back into stock.
    pub fn release(&mut self, quantity: i32) -> Result<(), ProductError> {
        if quantity < 0 {
            return Err(ProductError::NegativeQuantity);
        }
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(ProductError::StockLimitExceeded)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate(props: &NewProductProps) -> Result<(), ProductError> {
    if props.name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if props.price.is_negative() {
        return Err(ProductError::NegativePrice);
    }
    if props.price.exceeds_max() {
        return Err(ProductError::PriceTooHigh);
    }
    if props.quantity < 0 {
        return Err(ProductError::NegativeQuantity);
    }
    Ok(())
}

fn normalize_code(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_uppercase()).filter(|c| !c.is_empty())
}
