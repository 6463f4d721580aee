#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.email_already_registered")]
    EmailAlreadyRegistered,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("user.token_issue_failed")]
    TokenIssueFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
