use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::{CartTransaction, CartUnitOfWork};
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::{Money, UserId};
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{AccessToken, TokenService};
use crate::domain::voucher::model::Voucher;
use crate::domain::voucher::repository::VoucherRepository;
use crate::domain::voucher::services::VoucherDiscountService;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenService for Tokens {
        fn issue(&self, user_id: &UserId) -> Result<AccessToken, UserError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError>;
        async fn get_main_categories(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_children(&self, parent_id: Uuid) -> Result<Vec<Category>, RepositoryError>;
        async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn get_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub VoucherRepo {}

    #[async_trait]
    impl VoucherRepository for VoucherRepo {
        async fn get_all(&self) -> Result<Vec<Voucher>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Voucher, RepositoryError>;
        async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, RepositoryError>;
        async fn save(&self, voucher: &Voucher) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub VoucherDiscount {}

    #[async_trait]
    impl VoucherDiscountService for VoucherDiscount {
        async fn discounted_price(
            &self,
            product: &Product,
            now: DateTime<Utc>,
        ) -> Result<Money, RepositoryError>;
    }
}

mock! {
    pub UnitOfWork {}

    #[async_trait]
    impl CartUnitOfWork for UnitOfWork {
        async fn begin(&self) -> Result<Box<dyn CartTransaction>, RepositoryError>;
    }
}

mock! {
    pub CartTx {}

    #[async_trait]
    impl CartTransaction for CartTx {
        async fn find_cart_by_user(&mut self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
        async fn find_or_create_cart(&mut self, fresh: &Cart) -> Result<Cart, RepositoryError>;
        async fn save_cart(&mut self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn get_product_for_update(&mut self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn update_product_quantity(&mut self, product: &Product) -> Result<(), RepositoryError>;
        async fn save_item(&mut self, item: &CartItem) -> Result<(), RepositoryError>;
        async fn delete_item(&mut self, id: Uuid) -> Result<(), RepositoryError>;
        async fn commit(&mut self) -> Result<(), RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Unit of work handing out the given transaction exactly once.
pub fn unit_of_work(tx: MockCartTx) -> Arc<dyn CartUnitOfWork> {
    let tx: Box<dyn CartTransaction> = Box::new(tx);
    let mut uow = MockUnitOfWork::new();
    uow.expect_begin().times(1).return_once(move || Ok(tx));
    Arc::new(uow)
}

pub fn product_with_stock(id: Uuid, price_cents: i64, quantity: i32) -> Product {
    Product::from_repository(
        id,
        "Wireless Mouse".to_string(),
        None,
        Money::from_cents(price_cents),
        quantity,
        None,
        None,
        Utc::now(),
        Utc::now(),
    )
}

pub fn category(id: Uuid, name: &str, parent_id: Option<Uuid>) -> Category {
    Category::from_repository(id, name.to_string(), parent_id, Utc::now(), Utc::now())
}
