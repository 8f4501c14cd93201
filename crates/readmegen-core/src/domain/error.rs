//! Domain error types.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

use crate::domain::question::FieldId;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required free-text field was blank after trimming.
    ///
    /// Recovered locally by re-prompting; never surfaced as a process
    /// failure. The display string is the exact message shown next to
    /// the prompt.
    #[error("{}", .field.required_message())]
    EmptyField { field: FieldId },

    /// The email answer failed the syntactic pattern check.
    #[error("Please enter a valid email address!")]
    InvalidEmail { input: String },

    /// A license string outside the closed choice list reached the
    /// domain. The selection UI makes this unreachable in normal use;
    /// hitting it means an answer was injected without going through
    /// the questionnaire.
    #[error("unknown license '{value}'")]
    UnknownLicense { value: String },

    /// Rendering was attempted before the answer set was complete.
    #[error("no answer recorded for '{field}'")]
    MissingAnswer { field: FieldId },

    /// An answer for this field was already recorded. Entries are
    /// write-once: the prompt flow only advances past a field after its
    /// answer is accepted.
    #[error("answer for '{field}' already recorded")]
    DuplicateAnswer { field: FieldId },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => vec![
                format!("'{}' cannot be blank", field),
                "Type an answer and press Enter".into(),
            ],
            Self::InvalidEmail { input } => vec![
                format!("'{}' does not look like an email address", input),
                "Use a plain address like name@example.com".into(),
            ],
            Self::UnknownLicense { .. } => vec![
                "Valid licenses: MIT, Apache 2.0, GPL 3.0, BSD 3, None".into(),
            ],
            Self::MissingAnswer { .. } | Self::DuplicateAnswer { .. } => vec![
                "This is a bug in readmegen, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyField { .. } | Self::InvalidEmail { .. } => ErrorCategory::Validation,
            Self::UnknownLicense { .. } => ErrorCategory::Validation,
            // Invariant violations, not user mistakes.
            Self::MissingAnswer { .. } | Self::DuplicateAnswer { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
