//! Operations composing the repositories on behalf of the console views.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::{ErrorCode, RepositoryError};

pub mod convert;
pub mod leads;
pub mod opportunities;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("lead {0} not found")]
    LeadNotFound(i64),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// The normalized code carried by this failure, when it has one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ServiceError::LeadNotFound(_) => None,
            ServiceError::Form(_) => Some(ErrorCode::ValidationError),
            ServiceError::Repository(e) => Some(e.code),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
