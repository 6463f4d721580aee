use chrono::{DateTime, Utc};

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

/// A signed bearer token handed out on login.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Service port for issuing access tokens to authenticated users.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<AccessToken, UserError>;
}
