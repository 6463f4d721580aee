use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::VoucherError;
use super::value_objects::Discount;
use crate::domain::shared::value_objects::Money;

#[derive(Debug, Clone)]
pub struct Voucher {
    pub id: Uuid,
    pub code: String,
    pub discount: Discount,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Voucher {
    pub fn new(
        code: String,
        discount: Discount,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, VoucherError> {
        let code = normalize_code(&code);
        if code.is_empty() {
            return Err(VoucherError::CodeEmpty);
        }

        match discount {
            Discount::Percentage(percent) if percent > 100 => {
                return Err(VoucherError::InvalidPercentage);
            }
            Discount::Fixed(amount) if amount.is_negative() => {
                return Err(VoucherError::NegativeAmount);
            }
            Discount::Fixed(amount) if amount.exceeds_max() => {
                return Err(VoucherError::AmountTooHigh);
            }
            _ => {}
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            code,
            discount,
            expires_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        code: String,
        discount: Discount,
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            discount,
            expires_at,
            created_at,
            updated_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    pub fn apply_to(&self, price: Money) -> Money {
        self.discount.apply(price)
    }
}

/// Voucher codes are stored upper-cased and trimmed.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
