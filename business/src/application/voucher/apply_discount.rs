use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Money;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::services::VoucherDiscountService;

/// Resolves a product's voucher code against the voucher catalog.
///
/// Unknown or expired codes fall back to the list price.
pub struct VoucherDiscountServiceImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VoucherDiscountService for VoucherDiscountServiceImpl {
    async fn discounted_price(
        &self,
        product: &Product,
        now: DateTime<Utc>,
    ) -> Result<Money, RepositoryError> {
        let Some(code) = product.voucher_code.as_deref() else {
            return Ok(product.price);
        };

        let Some(voucher) = self.repository.find_by_code(code).await? else {
            self.logger.warn(&format!(
                "Product {} references unknown voucher {}",
                product.id, code
            ));
            return Ok(product.price);
        };

        if voucher.is_expired(now) {
            self.logger.warn(&format!(
                "Voucher {} expired, product {} sells at list price",
                voucher.code, product.id
            ));
            return Ok(product.price);
        }

        let price = voucher.apply_to(product.price);
        self.logger.debug(&format!(
            "Voucher {} brings product {} from {} to {}",
            voucher.code, product.id, product.price, price
        ));
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voucher::model::Voucher;
    use crate::domain::voucher::value_objects::Discount;
    use crate::test_utils::{MockLog, MockVoucherRepo, mock_logger, product_with_stock};
    use chrono::Duration;
    use uuid::Uuid;

    fn product_with_code(price_cents: i64, code: Option<&str>) -> Product {
        let mut product = product_with_stock(Uuid::new_v4(), price_cents, 10);
        product.voucher_code = code.map(str::to_string);
        product
    }

    fn repo_with(voucher: Voucher) -> MockVoucherRepo {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_find_by_code()
            .return_once(move |_| Ok(Some(voucher)));
        mock_repo
    }

    #[tokio::test]
    async fn should_return_list_price_when_product_has_no_voucher() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().never();

        let service = VoucherDiscountServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let price = service
            .discounted_price(&product_with_code(1999, None), Utc::now())
            .await
            .unwrap();

        assert_eq!(price, Money::from_cents(1999));
    }

    #[tokio::test]
    async fn should_apply_percentage_voucher() {
        let voucher = Voucher::new("TEN".to_string(), Discount::Percentage(10), None).unwrap();
        let service = VoucherDiscountServiceImpl {
            repository: Arc::new(repo_with(voucher)),
            logger: mock_logger(),
        };
        let product = product_with_code(2999, Some("TEN"));

        let price = service.discounted_price(&product, Utc::now()).await.unwrap();

        // 29.99 * 0.9 = 26.991
        assert_eq!(price, Money::from_cents(2699));
        assert_eq!(product.price, Money::from_cents(2999));
    }

    #[tokio::test]
    async fn should_apply_fixed_voucher_floored_at_zero() {
        let voucher = Voucher::new(
            "FIVER".to_string(),
            Discount::Fixed(Money::from_cents(500)),
            None,
        )
        .unwrap();
        let service = VoucherDiscountServiceImpl {
            repository: Arc::new(repo_with(voucher)),
            logger: mock_logger(),
        };

        let price = service
            .discounted_price(&product_with_code(300, Some("FIVER")), Utc::now())
            .await
            .unwrap();

        assert_eq!(price, Money::ZERO);
    }

    #[tokio::test]
    async fn should_warn_and_ignore_expired_voucher() {
        let now = Utc::now();
        let voucher = Voucher::new(
            "OLD".to_string(),
            Discount::Percentage(50),
            Some(now - Duration::days(1)),
        )
        .unwrap();
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());

        let service = VoucherDiscountServiceImpl {
            repository: Arc::new(repo_with(voucher)),
            logger: Arc::new(logger),
        };

        let price = service
            .discounted_price(&product_with_code(1000, Some("OLD")), now)
            .await
            .unwrap();

        assert_eq!(price, Money::from_cents(1000));
    }

    #[tokio::test]
    async fn should_warn_and_ignore_unknown_voucher() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().returning(|_| Ok(None));
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());

        let service = VoucherDiscountServiceImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let price = service
            .discounted_price(&product_with_code(1000, Some("GHOST")), Utc::now())
            .await
            .unwrap();

        assert_eq!(price, Money::from_cents(1000));
    }
}
