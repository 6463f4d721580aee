use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let category = Category::new(params.name, params.parent_id)?;

        if let Some(parent_id) = category.parent_id {
            self.repository
                .get_by_id(parent_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CategoryError::ParentNotFound,
                    other => CategoryError::Repository(other),
                })?;
        }

        self.repository.save(&category).await?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}
