use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested identifier.
    #[error("entity not found")]
    NotFound,
    /// A unique, foreign key, not-null or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// A stored value could not be turned into a domain type.
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("database error: {0}")]
    DatabaseError(DieselError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation),
                info,
            ) => RepositoryError::ConstraintViolation(format!("{kind:?}: {}", info.message())),
            other => RepositoryError::DatabaseError(other),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
