use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            UserError::InvalidEmail => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.invalid_email",
            ),
            UserError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.name_empty",
            ),
            UserError::PasswordTooShort => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_too_short",
            ),
            UserError::EmailAlreadyRegistered => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "user.email_already_registered",
            ),
            UserError::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "user.not_found")
            }
            UserError::TokenIssueFailed => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.token_issue_failed",
            ),
            UserError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
