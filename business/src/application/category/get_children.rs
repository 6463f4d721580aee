use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_children::{
    GetCategoryChildrenParams, GetCategoryChildrenUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCategoryChildrenUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryChildrenUseCase for GetCategoryChildrenUseCaseImpl {
    async fn execute(
        &self,
        params: GetCategoryChildrenParams,
    ) -> Result<Vec<Category>, CategoryError> {
        self.logger
            .info(&format!("Getting children of category: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        let children = self.repository.get_children(params.id).await?;
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCategoryRepo, category, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_direct_children() {
        let parent_id = Uuid::new_v4();
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id, "Books", None)));
        mock_repo
            .expect_get_children()
            .withf(move |id| *id == parent_id)
            .returning(|id| Ok(vec![category(Uuid::new_v4(), "Poetry", Some(id))]));

        let use_case = GetCategoryChildrenUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let children = use_case
            .execute(GetCategoryChildrenParams { id: parent_id })
            .await
            .unwrap();

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].parent_id, Some(parent_id));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_parent() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_get_children().never();

        let use_case = GetCategoryChildrenUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCategoryChildrenParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }
}
