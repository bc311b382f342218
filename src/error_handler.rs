//! View-facing error state.
//!
//! Repository and service failures never cross into a view as raw errors;
//! they are normalized here into a single current-error message that the
//! user can read and dismiss before retrying.

use log::error;

use crate::repository::errors::{ErrorCode, RepositoryError};
use crate::services::ServiceError;

/// Holds the current error message for one repository's worth of UI.
#[derive(Clone, Debug, Default)]
pub struct ErrorHandler {
    error: Option<String>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on display, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismisses the current error.
    pub fn clear(&mut self) {
        self.error = None;
    }

    /// Replaces the current error with an explicit message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clears any prior error, runs `op`, and returns its value on success.
    ///
    /// On failure the underlying error is logged, a normalized message is
    /// built from the failure's own code (falling back to `fallback`) plus
    /// the optional context, and `None` tells the caller the operation
    /// produced nothing.
    pub fn execute<T, E, F>(&mut self, fallback: ErrorCode, context: Option<&str>, op: F) -> Option<T>
    where
        E: Into<ServiceError>,
        F: FnOnce() -> Result<T, E>,
    {
        self.clear();
        match op() {
            Ok(value) => Some(value),
            Err(err) => {
                let err: ServiceError = err.into();
                let code = err.code().unwrap_or(fallback);
                error!("{}: {err}", code.as_str());

                let normalized = match context {
                    Some(context) => RepositoryError::with_context(code, context),
                    None => RepositoryError::new(code),
                };
                self.error = Some(normalized.to_string());
                None
            }
        }
    }
}
