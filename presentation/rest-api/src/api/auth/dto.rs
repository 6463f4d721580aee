use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;
use business::domain::user::use_cases::login::LoginResult;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Email address, unique per user
    pub email: String,
    /// Display name (cannot be empty)
    pub name: String,
    /// Password, at least 8 characters
    #[oai(write_only)]
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    #[oai(write_only)]
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User unique identifier
    pub id: String,
    pub email: String,
    pub name: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TokenResponse {
    /// Bearer token to send in the `Authorization` header
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Moment the token stops being accepted
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<LoginResult> for TokenResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.token.token,
            token_type: "Bearer".to_string(),
            expires_at: result.token.expires_at,
            user: result.user.into(),
        }
    }
}
