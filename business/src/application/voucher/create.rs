use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::create::{CreateVoucherParams, CreateVoucherUseCase};

pub struct CreateVoucherUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateVoucherUseCase for CreateVoucherUseCaseImpl {
    async fn execute(&self, params: CreateVoucherParams) -> Result<Voucher, VoucherError> {
        let voucher = Voucher::new(params.code, params.discount, params.expires_at)?;

        self.logger
            .info(&format!("Creating voucher: {}", voucher.code));

        if self.repository.find_by_code(&voucher.code).await?.is_some() {
            return Err(VoucherError::CodeAlreadyExists);
        }

        self.repository.save(&voucher).await.map_err(|e| match e {
            RepositoryError::Duplicated => VoucherError::CodeAlreadyExists,
            other => VoucherError::Repository(other),
        })?;

        self.logger
            .info(&format!("Voucher created with id: {}", voucher.id));
        Ok(voucher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Money;
    use crate::domain::voucher::value_objects::Discount;
    use crate::test_utils::{MockVoucherRepo, mock_logger};

    fn params(code: &str, discount: Discount) -> CreateVoucherParams {
        CreateVoucherParams {
            code: code.to_string(),
            discount,
            expires_at: None,
        }
    }

    #[tokio::test]
    async fn should_create_voucher_when_code_is_free() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "WELCOME10")
            .returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let voucher = use_case
            .execute(params("welcome10", Discount::Percentage(10)))
            .await
            .unwrap();

        assert_eq!(voucher.code, "WELCOME10");
        assert_eq!(voucher.discount, Discount::Percentage(10));
    }

    #[tokio::test]
    async fn should_reject_duplicated_code() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().returning(|code| {
            Ok(Some(
                Voucher::new(code.to_string(), Discount::Percentage(5), None).unwrap(),
            ))
        });
        mock_repo.expect_save().never();

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("SUMMER", Discount::Fixed(Money::from_cents(500))))
            .await;

        assert!(matches!(result.unwrap_err(), VoucherError::CodeAlreadyExists));
    }

    #[tokio::test]
    async fn should_map_unique_violation_on_save_to_duplicated_code() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("RACE", Discount::Percentage(1)))
            .await;

        assert!(matches!(result.unwrap_err(), VoucherError::CodeAlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_percentage_above_hundred() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().never();

        let use_case = CreateVoucherUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("GREEDY", Discount::Percentage(101)))
            .await;

        assert!(matches!(result.unwrap_err(), VoucherError::InvalidPercentage));
    }
}
