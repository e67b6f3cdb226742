use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A required foreign key does not resolve to an existing parent.
    #[error("referenced {0} does not exist")]
    Reference(&'static str),
    /// A stored or supplied value violated a domain constraint.
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
