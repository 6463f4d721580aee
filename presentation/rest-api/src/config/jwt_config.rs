use std::env;

/// Settings for signing and verifying access tokens
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: HMAC secret used to sign tokens (required)
    /// - JWT_TTL_SECONDS: Token lifetime in seconds (default: 86400)
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let ttl_seconds = parse_ttl(env::var("JWT_TTL_SECONDS").ok().as_deref());

        Self {
            secret,
            ttl_seconds,
        }
    }
}

/// Longest accepted token lifetime: one year.
pub const MAX_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

fn parse_ttl(raw: Option<&str>) -> i64 {
    let ttl = raw
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|ttl| *ttl > 0)
        .unwrap_or(86_400);
    if ttl > MAX_TTL_SECONDS {
        tracing::warn!("JWT_TTL_SECONDS is above one year, clamping to {MAX_TTL_SECONDS}");
        return MAX_TTL_SECONDS;
    }
    ttl
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_ttl_to_one_day() {
        assert_eq!(parse_ttl(None), 86_400);
    }

    #[test]
    fn should_parse_configured_ttl() {
        assert_eq!(parse_ttl(Some("3600")), 3600);
    }

    #[test]
    fn should_ignore_invalid_or_non_positive_ttl() {
        assert_eq!(parse_ttl(Some("soon")), 86_400);
        assert_eq!(parse_ttl(Some("0")), 86_400);
        assert_eq!(parse_ttl(Some("-5")), 86_400);
    }

    #[test]
    fn should_clamp_huge_ttl_to_one_year() {
        assert_eq!(parse_ttl(Some("9223372036854775807")), MAX_TTL_SECONDS);
        assert_eq!(parse_ttl(Some("31536001")), MAX_TTL_SECONDS);
        assert_eq!(parse_ttl(Some("31536000")), 31_536_000);
    }
}
