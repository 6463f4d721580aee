use async_trait::async_trait;

use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;

pub struct GetVoucherByCodeParams {
    pub code: String,
}

#[async_trait]
pub trait GetVoucherByCodeUseCase: Send + Sync {
    async fn execute(&self, params: GetVoucherByCodeParams) -> Result<Voucher, VoucherError>;
}
