use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::CategoryFormError;
use crate::forms::posts::PostFormError;
use crate::forms::topics::TopicFormError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A required foreign key does not resolve.
    #[error("{0}")]
    Reference(String),
    /// Supplied input failed validation.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<TypeConstraintError> for ServiceError {
    fn from(value: TypeConstraintError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(value: CategoryFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<TopicFormError> for ServiceError {
    fn from(value: TopicFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

impl From<PostFormError> for ServiceError {
    fn from(value: PostFormError) -> Self {
        ServiceError::Form(value.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
