//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the prompt flow or writing output.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The interactive session was aborted by the operator.
    #[error("operation cancelled")]
    PromptAborted,

    /// The input stream failed or closed mid-session.
    #[error("input stream error: {reason}")]
    InputStream { reason: String },

    /// The rendered document could not be written.
    #[error("failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PromptAborted => vec![
                "The session was cancelled".into(),
                "No README was written".into(),
            ],
            Self::InputStream { .. } => vec![
                "readmegen needs an interactive terminal".into(),
                "Run it directly in a shell, not behind a pipe".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permission in this directory".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptAborted => ErrorCategory::Aborted,
            Self::InputStream { .. } => ErrorCategory::Aborted,
            Self::WriteFailed { .. } => ErrorCategory::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_suggestions_mention_permissions() {
        let err = ApplicationError::WriteFailed {
            path: PathBuf::from("README.md"),
            reason: "permission denied".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("permission")));
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn aborted_session_is_not_an_io_error() {
        assert_eq!(
            ApplicationError::PromptAborted.category(),
            ErrorCategory::Aborted
        );
    }
}
