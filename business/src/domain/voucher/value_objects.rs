use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::Money;

/// How a voucher reduces a unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// Whole percent taken off, 0..=100.
    Percentage(u8),
    /// Fixed amount taken off, never below zero.
    Fixed(Money),
}

impl Discount {
    pub fn kind(&self) -> DiscountKind {
        match self {
            Discount::Percentage(_) => DiscountKind::Percentage,
            Discount::Fixed(_) => DiscountKind::Fixed,
        }
    }

    /// Raw stored value: percent for percentages, cents for fixed amounts.
    pub fn value(&self) -> i64 {
        match self {
            Discount::Percentage(percent) => i64::from(*percent),
            Discount::Fixed(amount) => amount.cents(),
        }
    }

    pub fn from_parts(kind: DiscountKind, value: i64) -> Option<Self> {
        match kind {
            DiscountKind::Percentage => u8::try_from(value)
                .ok()
                .filter(|p| *p <= 100)
                .map(Discount::Percentage),
            DiscountKind::Fixed => Some(Discount::Fixed(Money::from_cents(value))),
        }
    }

    pub fn apply(&self, price: Money) -> Money {
        match self {
            Discount::Percentage(percent) => price.percent_off(*percent),
            Discount::Fixed(amount) => price.saturating_sub(*amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::Fixed => write!(f, "fixed"),
        }
    }
}

impl std::str::FromStr for DiscountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed" => Ok(DiscountKind::Fixed),
            _ => Err(format!("Invalid discount kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_percentage_discount() {
        let discount = Discount::Percentage(20);
        assert_eq!(
            discount.apply(Money::from_cents(5000)),
            Money::from_cents(4000)
        );
    }

    #[test]
    fn should_apply_fixed_discount() {
        let discount = Discount::Fixed(Money::from_cents(750));
        assert_eq!(
            discount.apply(Money::from_cents(5000)),
            Money::from_cents(4250)
        );
    }

    #[test]
    fn should_not_go_below_zero_with_fixed_discount() {
        let discount = Discount::Fixed(Money::from_cents(9000));
        assert_eq!(discount.apply(Money::from_cents(5000)), Money::ZERO);
    }

    #[test]
    fn should_rebuild_discount_from_stored_parts() {
        assert_eq!(
            Discount::from_parts(DiscountKind::Percentage, 15),
            Some(Discount::Percentage(15))
        );
        assert_eq!(
            Discount::from_parts(DiscountKind::Fixed, 250),
            Some(Discount::Fixed(Money::from_cents(250)))
        );
        assert_eq!(Discount::from_parts(DiscountKind::Percentage, 101), None);
        assert_eq!(Discount::from_parts(DiscountKind::Percentage, -1), None);
    }

    #[test]
    fn should_parse_and_display_discount_kind() {
        for kind in [DiscountKind::Percentage, DiscountKind::Fixed] {
            assert_eq!(kind.to_string().parse::<DiscountKind>().unwrap(), kind);
        }
        assert!("bogus".parse::<DiscountKind>().is_err());
    }
}
