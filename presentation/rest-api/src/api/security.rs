use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::UserError;
use business::domain::user::services::{AccessToken, TokenService};

use crate::config::jwt_config::{JwtConfig, MAX_TTL_SECONDS};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies HS256 access tokens.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::seconds(config.ttl_seconds.clamp(-MAX_TTL_SECONDS, MAX_TTL_SECONDS)),
        }
    }

    /// Returns the user a valid, unexpired token was issued to.
    pub fn verify(&self, token: &str) -> Result<UserId, String> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

        data.claims
            .sub
            .parse::<UserId>()
            .map_err(|e| format!("auth.invalid_subject: {e}"))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<AccessToken, UserError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {e}");
                UserError::TokenIssueFailed
            })?;

        Ok(AccessToken { token, expires_at })
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub UserId);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let Some(tokens) = req.data::<Arc<JwtTokenService>>() else {
        tracing::error!("JwtTokenService is not registered on the route");
        return None;
    };

    match tokens.verify(&bearer.token) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}
