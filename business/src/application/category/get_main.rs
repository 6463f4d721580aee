use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_main::GetMainCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetMainCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMainCategoriesUseCase for GetMainCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.info("Getting main categories");
        let categories = self.repository.get_main_categories().await?;
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockCategoryRepo, category, mock_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_only_what_repository_marks_as_main() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_get_main_categories().returning(|| {
            Ok(vec![
                category(Uuid::new_v4(), "Books", None),
                category(Uuid::new_v4(), "Garden", None),
            ])
        });

        let use_case = GetMainCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert!(categories.iter().all(Category::is_main));
    }
}
