use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCategoryUseCaseImpl {
    /// Walks up from `parent_id` to the root; finding `id` on the way means
    /// the move would close a cycle.
    async fn ensure_not_descendant(&self, id: Uuid, parent_id: Uuid) -> Result<(), CategoryError> {
        let mut current = Some(parent_id);
        while let Some(ancestor_id) = current {
            if ancestor_id == id {
                return Err(CategoryError::CyclicParent);
            }
            let ancestor = self
                .repository
                .get_by_id(ancestor_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CategoryError::ParentNotFound,
                    other => CategoryError::Repository(other),
                })?;
            current = ancestor.parent_id;
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        if let Some(parent_id) = params.parent_id {
            self.ensure_not_descendant(existing.id, parent_id).await?;
        }

        let updated = Category::from_repository(
            existing.id,
            params.name,
            params.parent_id,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Category updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCategoryRepo, category, mock_logger};

    #[tokio::test]
    async fn should_rename_category() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Boks", None)));
        mock_repo
            .expect_save()
            .withf(|c| c.name == "Books")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateCategoryParams {
                id,
                name: "Books".to_string(),
                parent_id: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Books");
    }

    #[tokio::test]
    async fn should_reject_category_as_its_own_parent() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Books", None)));
        mock_repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                name: "Books".to_string(),
                parent_id: Some(id),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::CyclicParent));
    }

    #[tokio::test]
    async fn should_reject_move_under_own_descendant() {
        // root -> child -> grandchild; moving root under grandchild closes a loop
        let root = Uuid::new_v4();
        let child = Uuid::new_v4();
        let grandchild = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            if id == grandchild {
                Ok(category(id, "Grandchild", Some(child)))
            } else if id == child {
                Ok(category(id, "Child", Some(root)))
            } else {
                Ok(category(id, "Root", None))
            }
        });
        mock_repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id: root,
                name: "Root".to_string(),
                parent_id: Some(grandchild),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::CyclicParent));
    }

    #[tokio::test]
    async fn should_reject_unknown_parent() {
        let id = Uuid::new_v4();
        let missing_parent = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_by_id().returning(move |requested| {
            if requested == missing_parent {
                Err(RepositoryError::NotFound)
            } else {
                Ok(category(requested, "Books", None))
            }
        });

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCategoryParams {
                id,
                name: "Books".to_string(),
                parent_id: Some(missing_parent),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::ParentNotFound));
    }
}
