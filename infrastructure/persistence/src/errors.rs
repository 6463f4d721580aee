use business::domain::errors::RepositoryError;

/// Translates driver errors into repository errors the domain understands.
///
/// Unique violations become `Duplicated`, foreign key violations
/// `Referenced`; everything else is logged and reported as a database error.
pub fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::Referenced,
        _ => {
            tracing::error!("Database error: {}", error);
            RepositoryError::DatabaseError
        }
    }
}
