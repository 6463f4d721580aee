use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::password::{MIN_PASSWORD_LENGTH, hash_password};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, UserError> {
        self.logger.info("Registering user");

        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }

        let user = User::new(NewUserProps {
            email: params.email,
            name: params.name,
            password_hash: hash_password(&params.password),
        })?;

        if self.repository.find_by_email(&user.email).await?.is_some() {
            return Err(UserError::EmailAlreadyRegistered);
        }

        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailAlreadyRegistered,
            other => UserError::Repository(other),
        })?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::password::verify_password;
    use crate::test_utils::{MockUserRepo, mock_logger};
    use chrono::Utc;

    fn params(email: &str, password: &str) -> RegisterUserParams {
        RegisterUserParams {
            email: email.to_string(),
            name: "Grace".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn should_register_user_with_hashed_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .withf(|user| verify_password("s3cret-pass", &user.password_hash))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(params("Grace@Example.com", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(user.email, "grace@example.com");
        assert_ne!(user.password_hash, "s3cret-pass");
    }

    #[tokio::test]
    async fn should_reject_short_password() {
        let mock_repo = MockUserRepo::new();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("grace@example.com", "short")).await;

        assert!(matches!(result.unwrap_err(), UserError::PasswordTooShort));
    }

    #[tokio::test]
    async fn should_reject_invalid_email() {
        let mock_repo = MockUserRepo::new();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("grace", "long-enough")).await;

        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }

    #[tokio::test]
    async fn should_reject_when_email_already_registered() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().returning(|email| {
            Ok(Some(User::from_repository(
                UserId::generate(),
                email.to_string(),
                "Existing".to_string(),
                "hash".to_string(),
                Utc::now(),
                Utc::now(),
            )))
        });
        mock_repo.expect_save().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("grace@example.com", "long-enough"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyRegistered
        ));
    }

    #[tokio::test]
    async fn should_map_unique_violation_on_save_to_already_registered() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("grace@example.com", "long-enough"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyRegistered
        ));
    }
}
