//! User-input structs validated before any mutation reaches a repository.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::DomainError;

pub mod lead;
pub mod opportunity;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("amount must be a non-negative number")]
    InvalidAmount,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
