#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.parent_not_found")]
    ParentNotFound,
    #[error("category.cyclic_parent")]
    CyclicParent,
    #[error("category.has_children")]
    HasChildren,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
