use async_trait::async_trait;

use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;

#[async_trait]
pub trait GetAllVouchersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Voucher>, VoucherError>;
}
