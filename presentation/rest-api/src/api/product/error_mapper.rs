use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_price",
            ),
            ProductError::PriceTooHigh => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_too_high",
            ),
            ProductError::NegativeQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_quantity",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::CategoryNotFound => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_not_found",
            ),
            ProductError::InUse => (StatusCode::CONFLICT, "Conflict", "product.in_use"),
            ProductError::InsufficientStock => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.insufficient_stock",
            ),
            ProductError::StockLimitExceeded => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.stock_limit_exceeded",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        error_response(status, name, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_reserved_product_to_conflict() {
        let (status, json) = ProductError::InUse.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "Conflict");
        assert_eq!(json.0.message, "product.in_use");
    }

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        for err in [
            ProductError::NameEmpty,
            ProductError::NegativePrice,
            ProductError::PriceTooHigh,
            ProductError::NegativeQuantity,
        ] {
            assert_eq!(err.into_error_response().0, StatusCode::BAD_REQUEST);
        }
    }
}
