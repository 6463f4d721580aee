use crate::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.insufficient_stock")]
    InsufficientStock,
    #[error("cart.quantity_limit_exceeded")]
    QuantityLimitExceeded,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl CartError {
    /// Maps a failed stock release on a product.
    pub fn from_stock_release(error: ProductError) -> Self {
        match error {
            ProductError::StockLimitExceeded => CartError::QuantityLimitExceeded,
            _ => CartError::InvalidQuantity,
        }
    }
}
