use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::voucher::errors::VoucherError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for VoucherError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            VoucherError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.code_empty",
            ),
            VoucherError::InvalidPercentage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.invalid_percentage",
            ),
            VoucherError::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.negative_amount",
            ),
            VoucherError::AmountTooHigh => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "voucher.amount_too_high",
            ),
            VoucherError::CodeAlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "voucher.code_already_exists",
            ),
            VoucherError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "voucher.not_found"),
            VoucherError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        error_response(status, name, message)
    }
}
