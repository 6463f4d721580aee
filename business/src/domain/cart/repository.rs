use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

use super::model::{Cart, CartItem};

/// Opens transactional units of work for cart mutations.
#[async_trait]
pub trait CartUnitOfWork: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn CartTransaction>, RepositoryError>;
}

/// Repository operations bound to one database transaction.
///
/// Nothing is persisted until `commit` succeeds; dropping the transaction
/// without committing rolls every change back.
#[async_trait]
pub trait CartTransaction: Send {
    /// Loads the user's cart with its items, locking the cart row.
    async fn find_cart_by_user(
        &mut self,
        user_id: &UserId,
    ) -> Result<Option<Cart>, RepositoryError>;
    /// Returns the user's cart, inserting `fresh` first when the user has none.
    /// Safe against concurrent first adds for the same user.
    async fn find_or_create_cart(&mut self, fresh: &Cart) -> Result<Cart, RepositoryError>;
    /// Inserts or updates the cart row (not its items).
    async fn save_cart(&mut self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Loads a product, locking its row until the transaction ends.
    async fn get_product_for_update(&mut self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn update_product_quantity(&mut self, product: &Product) -> Result<(), RepositoryError>;
    async fn save_item(&mut self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn delete_item(&mut self, id: Uuid) -> Result<(), RepositoryError>;
    async fn commit(&mut self) -> Result<(), RepositoryError>;
}
