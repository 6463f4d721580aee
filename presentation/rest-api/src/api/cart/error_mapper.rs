use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.invalid_quantity",
            ),
            CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.product_not_found")
            }
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found"),
            CartError::InsufficientStock => (
                StatusCode::CONFLICT,
                "Conflict",
                "cart.insufficient_stock",
            ),
            CartError::QuantityLimitExceeded => (
                StatusCode::CONFLICT,
                "Conflict",
                "cart.quantity_limit_exceeded",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        error_response(status, name, message)
    }
}
