use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::services::AccessToken;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub user: User,
    pub token: AccessToken,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, UserError>;
}
