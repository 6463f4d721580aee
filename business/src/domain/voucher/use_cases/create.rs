use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::voucher::errors::VoucherError;
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::value_objects::Discount;

pub struct CreateVoucherParams {
    pub code: String,
    pub discount: Discount,
    pub expires_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait CreateVoucherUseCase: Send + Sync {
    async fn execute(&self, params: CreateVoucherParams) -> Result<Voucher, VoucherError>;
}
