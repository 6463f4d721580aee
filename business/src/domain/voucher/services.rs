use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Money;

/// Service port resolving the unit price a product sells at once its
/// voucher is applied.
///
/// The product's list price is left untouched; callers lock the returned
/// value into the cart item.
#[async_trait]
pub trait VoucherDiscountService: Send + Sync {
    async fn discounted_price(
        &self,
        product: &Product,
        now: DateTime<Utc>,
    ) -> Result<Money, RepositoryError>;
}
