use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let updated = existing.replace(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            quantity: params.quantity,
            category_id: params.category_id,
            voucher_code: params.voucher_code,
        })?;

        if let Some(category_id) = updated.category_id.filter(|id| existing.category_id != Some(*id)) {
            self.category_repository
                .get_by_id(category_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ProductError::CategoryNotFound,
                    other => ProductError::Repository(other),
                })?;
        }

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Money;
    use crate::test_utils::{MockCategoryRepo, MockProductRepo, mock_logger, product_with_stock};
    use uuid::Uuid;

    fn params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Wireless Mouse v2".to_string(),
            description: Some("Silent clicks".to_string()),
            price: Money::from_cents(3499),
            quantity: 12,
            category_id: None,
            voucher_code: None,
        }
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_stock(id, 2999, 5)));
        mock_repo
            .expect_save()
            .withf(|p| p.quantity == 12 && p.price == Money::from_cents(3499))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let product = use_case.execute(params(product_id)).await.unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Wireless Mouse v2");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4())).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_with_negative_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_stock(id, 2999, 5)));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                price: Money::from_cents(-5),
                ..params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativePrice));
    }

    #[tokio::test]
    async fn should_reject_move_to_unknown_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_stock(id, 2999, 5)));
        mock_repo.expect_save().never();
        let mut mock_categories = MockCategoryRepo::new();
        mock_categories
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(mock_categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                category_id: Some(Uuid::new_v4()),
                ..params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }
}
