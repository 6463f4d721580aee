use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::voucher::errors::VoucherError;

pub struct DeleteVoucherParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteVoucherUseCase: Send + Sync {
    async fn execute(&self, params: DeleteVoucherParams) -> Result<(), VoucherError>;
}
