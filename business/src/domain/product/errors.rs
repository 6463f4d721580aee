#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.price_too_high")]
    PriceTooHigh,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error("product.in_use")]
    InUse,
    #[error("product.insufficient_stock")]
    InsufficientStock,
    #[error("product.stock_limit_exceeded")]
    StockLimitExceeded,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
