//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` impls linking them live here.

use crate::domain::types::TypeConstraintError;
use crate::dto::DtoError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<DtoError> for ServiceError {
    fn from(val: DtoError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
