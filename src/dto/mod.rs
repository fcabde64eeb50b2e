//! Wire-safe projections of catalog entities.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod categories;
pub mod products;

/// Reasons an incoming DTO cannot be turned into domain data.
#[derive(Debug, Error)]
pub enum DtoError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("invalid data: {0}")]
    TypeConstraint(#[from] TypeConstraintError),
    #[error("category reference is missing an id")]
    MissingCategoryId,
}
