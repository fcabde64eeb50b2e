use thiserror::Error;

/// Error type returned by every service operation.
///
/// Store failures are translated into [`ServiceError::ResourceNotFound`] or
/// [`ServiceError::Database`] only where the service knows what they mean;
/// anything else is logged and reported as [`ServiceError::Internal`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// An id-based lookup or reference resolution found nothing.
    #[error("{0}")]
    ResourceNotFound(String),
    /// A write was rejected by a referential or uniqueness constraint.
    #[error("{0}")]
    Database(String),
    /// Incoming data failed validation.
    #[error("{0}")]
    Validation(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
