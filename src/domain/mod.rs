//! Domain entities exposed by the console core.

use thiserror::Error;

pub mod lead;
pub mod opportunity;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors produced when parsing user-supplied enum values.
pub enum DomainError {
    #[error("unknown lead status: {0}")]
    UnknownStatus(String),

    #[error("unknown opportunity stage: {0}")]
    UnknownStage(String),
}
