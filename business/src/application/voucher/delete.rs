use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::use_cases::delete::{DeleteVoucherParams, DeleteVoucherUseCase};

pub struct DeleteVoucherUseCaseImpl {
    pub repository: Arc<dyn VoucherRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteVoucherUseCase for DeleteVoucherUseCaseImpl {
    async fn execute(&self, params: DeleteVoucherParams) -> Result<(), VoucherError> {
        self.logger
            .info(&format!("Deleting voucher: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => VoucherError::NotFound,
                other => VoucherError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Voucher deleted: {}", params.id));
        Ok(())
    }
}
