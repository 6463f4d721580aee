use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::Money;
use business::domain::voucher::model::Voucher;
use business::domain::voucher::value_objects::{Discount, DiscountKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum DiscountTypeDto {
    #[oai(rename = "percentage")]
    Percentage,
    #[oai(rename = "fixed")]
    Fixed,
}

impl From<DiscountKind> for DiscountTypeDto {
    fn from(kind: DiscountKind) -> Self {
        match kind {
            DiscountKind::Percentage => DiscountTypeDto::Percentage,
            DiscountKind::Fixed => DiscountTypeDto::Fixed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateVoucherRequest {
    /// Voucher code, stored upper-cased
    pub code: String,
    pub discount_type: DiscountTypeDto,
    /// Whole percent ("15") or an amount ("4.99")
    pub value: String,
    #[oai(skip_serializing_if_is_none)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateVoucherRequest {
    /// Reads `value` according to `discount_type`.
    pub fn discount(&self) -> Option<Discount> {
        match self.discount_type {
            DiscountTypeDto::Percentage => self
                .value
                .trim()
                .parse::<u8>()
                .ok()
                .map(Discount::Percentage),
            DiscountTypeDto::Fixed => self.value.parse::<Money>().ok().map(Discount::Fixed),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct VoucherResponse {
    /// Voucher unique identifier
    pub id: String,
    pub code: String,
    pub discount_type: DiscountTypeDto,
    /// Whole percent or amount taken off the unit price
    pub value: String,
    #[oai(skip_serializing_if_is_none)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Voucher> for VoucherResponse {
    fn from(voucher: Voucher) -> Self {
        let value = match voucher.discount {
            Discount::Percentage(percent) => percent.to_string(),
            Discount::Fixed(amount) => amount.to_string(),
        };
        Self {
            id: voucher.id.to_string(),
            code: voucher.code,
            discount_type: voucher.discount.kind().into(),
            value,
            expires_at: voucher.expires_at,
            created_at: voucher.created_at,
        }
    }
}
