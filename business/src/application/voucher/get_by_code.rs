use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::{Voucher, normalize_code};
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::get_by_code::{
    GetVoucherByCodeParams, GetVoucherByCodeUseCase,
};

pub struct GetVoucherByCodeUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetVoucherByCodeUseCase for GetVoucherByCodeUseCaseImpl {
    async fn execute(&self, params: GetVoucherByCodeParams) -> Result<Voucher, VoucherError> {
        let code = normalize_code(&params.code);
        self.logger
            .info(&format!("Fetching voucher by code: {}", code));

        self.repository
            .find_by_code(&code)
            .await?
            .ok_or(VoucherError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voucher::value_objects::Discount;
    use crate::test_utils::{MockVoucherRepo, mock_logger};

    #[tokio::test]
    async fn should_find_voucher_ignoring_case_and_whitespace() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "BLACKFRIDAY")
            .returning(|code| {
                Ok(Some(
                    Voucher::new(code.to_string(), Discount::Percentage(30), None).unwrap(),
                ))
            });

        let use_case = GetVoucherByCodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let voucher = use_case
            .execute(GetVoucherByCodeParams {
                code: " blackfriday ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(voucher.code, "BLACKFRIDAY");
    }

    #[tokio::test]
    async fn should_return_not_found_when_code_unknown() {
        let mut mock_repo = MockVoucherRepo::new();
        mock_repo.expect_find_by_code().returning(|_| Ok(None));

        let use_case = GetVoucherByCodeUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetVoucherByCodeParams {
                code: "NOPE".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), VoucherError::NotFound));
    }
}
