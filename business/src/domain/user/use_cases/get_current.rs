use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct GetCurrentUserParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, params: GetCurrentUserParams) -> Result<User, UserError>;
}
