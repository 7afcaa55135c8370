use thiserror::Error;

use crate::domain::types::InvalidUuidError;
use crate::domain::validation::{EntityValidationError, FieldErrors};
use crate::forms::categories::CategoryFormError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Input violated entity rules.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// A constrained value such as an identifier was malformed.
    #[error("invalid data: {0}")]
    TypeConstraint(String),
    /// The input document could not be read.
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<EntityValidationError> for ServiceError {
    fn from(val: EntityValidationError) -> Self {
        ServiceError::Validation(val.into_errors())
    }
}

impl From<InvalidUuidError> for ServiceError {
    fn from(val: InvalidUuidError) -> Self {
        ServiceError::TypeConstraint(format!("{val}: {}", val.value()))
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        match val {
            CategoryFormError::Validation(e) => e.into(),
            CategoryFormError::Identifier(e) => e.into(),
        }
    }
}
