use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::Money;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }

    pub fn unauthorized() -> Json<Self> {
        Json(Self {
            name: "Unauthorized".to_string(),
            message: "auth.unauthorized".to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the `(status, body)` pair every error mapper returns.
pub fn error_response(
    status: StatusCode,
    name: &str,
    message: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        }),
    )
}

/// Parses a path id, answering with `<resource>.invalid_id` on failure.
pub fn parse_id(raw: &str, resource: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(&format!("{resource}.invalid_id")))
}

/// Parses a decimal amount such as `19.99`, answering with `<resource>.invalid_amount`.
pub fn parse_money(raw: &str, resource: &str) -> Result<Money, Json<ErrorResponse>> {
    raw.parse::<Money>()
        .map_err(|_| ErrorResponse::validation(&format!("{resource}.invalid_amount")))
}
