use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::voucher::model::Voucher;
use business::domain::voucher::value_objects::{Discount, DiscountKind};

use crate::money::{from_numeric, to_numeric};

pub const VOUCHER_COLUMNS: &str =
    "id, code, discount_kind, discount_value, expires_at, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct VoucherEntity {
    pub id: Uuid,
    pub code: String,
    pub discount_kind: String,
    pub discount_value: BigDecimal,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VoucherEntity {
    pub fn into_domain(self) -> Result<Voucher, RepositoryError> {
        let discount = discount_from_columns(&self.discount_kind, &self.discount_value)
            .ok_or_else(|| {
                tracing::error!(
                    "Voucher {} has an unreadable discount ({} {})",
                    self.code,
                    self.discount_kind,
                    self.discount_value
                );
                RepositoryError::Persistence
            })?;

        Ok(Voucher::from_repository(
            self.id,
            self.code,
            discount,
            self.expires_at,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Percentages are stored as whole numbers, fixed amounts as money.
pub fn discount_to_column(discount: &Discount) -> BigDecimal {
    match discount {
        Discount::Percentage(percent) => BigDecimal::from(*percent),
        Discount::Fixed(amount) => to_numeric(*amount),
    }
}

fn discount_from_columns(kind: &str, value: &BigDecimal) -> Option<Discount> {
    match kind.parse::<DiscountKind>().ok()? {
        DiscountKind::Percentage => {
            Discount::from_parts(DiscountKind::Percentage, value.to_i64()?)
        }
        DiscountKind::Fixed => from_numeric(value).ok().map(Discount::Fixed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::Money;
    use std::str::FromStr;

    #[test]
    fn should_read_percentage_discount() {
        let value = BigDecimal::from_str("15.00").unwrap();
        assert_eq!(
            discount_from_columns("percentage", &value),
            Some(Discount::Percentage(15))
        );
    }

    #[test]
    fn should_read_fixed_discount_as_money() {
        let value = BigDecimal::from_str("4.99").unwrap();
        assert_eq!(
            discount_from_columns("fixed", &value),
            Some(Discount::Fixed(Money::from_cents(499)))
        );
    }

    #[test]
    fn should_reject_unknown_kind_or_out_of_range_percentage() {
        let value = BigDecimal::from_str("150").unwrap();
        assert_eq!(discount_from_columns("percentage", &value), None);
        assert_eq!(discount_from_columns("bogo", &value), None);
    }

    #[test]
    fn should_store_discount_values() {
        assert_eq!(
            discount_to_column(&Discount::Percentage(20)),
            BigDecimal::from(20)
        );
        assert_eq!(
            discount_to_column(&Discount::Fixed(Money::from_cents(250))).to_string(),
            "2.50"
        );
    }
}
