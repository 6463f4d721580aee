use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::ToPrimitive;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Money;

/// `NUMERIC(12,2)` value for an amount held in cents.
pub fn to_numeric(money: Money) -> BigDecimal {
    BigDecimal::new(money.cents().into(), 2)
}

/// Reads a `NUMERIC` column back into cents, rounding half up past the second decimal.
pub fn from_numeric(value: &BigDecimal) -> Result<Money, RepositoryError> {
    let (cents, _) = value
        .with_scale_round(2, RoundingMode::HalfUp)
        .into_bigint_and_exponent();
    cents.to_i64().map(Money::from_cents).ok_or_else(|| {
        tracing::error!("Amount {} does not fit in cents", value);
        RepositoryError::Persistence
    })
}
