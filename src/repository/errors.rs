//! Normalized error taxonomy shared by the repositories and the view layer.
//!
//! Storage and parse failures are caught at the repository boundary and
//! normalized into a stable code plus a user-displayable message; nothing
//! below this module ever reaches a view as a raw error.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Stable machine-readable codes for every failure the console surfaces.
///
/// `NetworkError` is reserved: the core is fully offline today, but callers
/// syncing through a backend reuse the same taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    LoadFailed,
    SaveFailed,
    UpdateFailed,
    DeleteFailed,
    ValidationError,
    NetworkError,
}

impl ErrorCode {
    /// Stable identifier used in logs and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::LoadFailed => "LOAD_FAILED",
            ErrorCode::SaveFailed => "SAVE_FAILED",
            ErrorCode::UpdateFailed => "UPDATE_FAILED",
            ErrorCode::DeleteFailed => "DELETE_FAILED",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
        }
    }

    /// Base human-readable message shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::LoadFailed => "Failed to load data",
            ErrorCode::SaveFailed => "Failed to save data",
            ErrorCode::UpdateFailed => "Failed to update data",
            ErrorCode::DeleteFailed => "Failed to delete data",
            ErrorCode::ValidationError => "Invalid data provided",
            ErrorCode::NetworkError => "Network connection failed",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error normalized at the repository boundary: a stable code, a message
/// ready for display, and the underlying cause kept for logs.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RepositoryError {
    pub code: ErrorCode,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RepositoryError {
    /// An error carrying only the code's base message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
            source: None,
        }
    }

    /// An error whose message is annotated with a context fragment, e.g.
    /// `"Failed to update data: lead 5"`.
    pub fn with_context(code: ErrorCode, context: impl Display) -> Self {
        Self {
            code,
            message: format!("{}: {context}", code.message()),
            source: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn caused_by(mut self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.source = Some(source.into());
        self
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
