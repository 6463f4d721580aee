use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let email = normalize_email(&props.email);
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(UserError::InvalidEmail);
        }

        if props.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            email,
            name: props.name.trim().to_string(),
            password_hash: props.password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        email: String,
        name: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            created_at,
            updated_at,
        }
    }
}

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(email: &str, name: &str) -> NewUserProps {
        NewUserProps {
            email: email.to_string(),
            name: name.to_string(),
            password_hash: "salt$digest".to_string(),
        }
    }

    #[test]
    fn should_create_user_when_email_and_name_valid() {
        let user = User::new(props("ada@example.com", "Ada")).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn should_normalize_email_case_and_whitespace() {
        let user = User::new(props("  Ada@Example.COM ", "Ada")).unwrap();
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn should_reject_when_email_invalid() {
        let result = User::new(props("not-an-email", "Ada"));
        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = User::new(props("ada@example.com", "   "));
        assert!(matches!(result.unwrap_err(), UserError::NameEmpty));
    }
}
