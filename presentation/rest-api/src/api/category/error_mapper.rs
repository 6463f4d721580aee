use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CategoryError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.name_empty",
            ),
            CategoryError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            CategoryError::ParentNotFound => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.parent_not_found",
            ),
            CategoryError::CyclicParent => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.cyclic_parent",
            ),
            CategoryError::HasChildren => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "category.has_children",
            ),
            CategoryError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
