#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    #[error("voucher.code_empty")]
    CodeEmpty,
    #[error("voucher.invalid_percentage")]
    InvalidPercentage,
    #[error("voucher.negative_amount")]
    NegativeAmount,
    #[error("voucher.amount_too_high")]
    AmountTooHigh,
    #[error("voucher.code_already_exists")]
    CodeAlreadyExists,
    #[error("voucher.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
