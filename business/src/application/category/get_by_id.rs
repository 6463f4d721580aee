use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCategoryByIdUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryByIdUseCase for GetCategoryByIdUseCaseImpl {
    async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Fetching category by id: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })
    }
}
