//! Unified error handling for readmegen core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for readmegen core operations.
#[derive(Debug, Error, Clone)]
pub enum ReadmegenError {
    /// Errors from the domain layer (validation, rendering).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (prompt flow, file writing).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ReadmegenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in readmegen".into(),
                "Please open an issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::error::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::error::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A user answer failed validation.
    Validation,
    /// The interactive session ended early.
    Aborted,
    /// Filesystem failure while writing output.
    Io,
    /// Invariant violation; a bug.
    Internal,
}

/// Convenient result type alias.
pub type ReadmegenResult<T> = Result<T, ReadmegenError>;
