use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::password::verify_password;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::TokenService;
use crate::domain::user::use_cases::login::{LoginParams, LoginResult, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, UserError> {
        let email = normalize_email(&params.email);

        let Some(user) = self.repository.find_by_email(&email).await? else {
            self.logger.warn("Login attempt for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(&params.password, &user.password_hash) {
            self.logger
                .warn(&format!("Invalid password for user: {}", user.id));
            return Err(UserError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id)?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(LoginResult { user, token })
    }
}
