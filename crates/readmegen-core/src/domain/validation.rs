//! Per-field answer validation.
//!
//! Centralized, pure validation: the prompt flow calls
//! [`AnswerValidator::validate`] on each submitted answer and re-prompts
//! on failure. No field is ever mutated here except through the returned
//! accepted value.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::DomainError;
use crate::domain::question::FieldId;

/// Syntactic email check: word characters with optional dot/hyphen
/// separators, an `@`, a similarly shaped domain, and one or more 2-3
/// character TLD segments. Deliberately not RFC 5322.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern is valid")
});

/// Centralized answer validation.
pub struct AnswerValidator;

impl AnswerValidator {
    /// Validate a raw answer for a field, returning the accepted value.
    ///
    /// Accepted values are passed through verbatim; defaults for empty
    /// answers are applied by the prompt flow before validation, not
    /// here.
    pub fn validate(field: FieldId, raw: &str) -> Result<String, DomainError> {
        match field {
            FieldId::Title | FieldId::Description | FieldId::Github => {
                if raw.trim().is_empty() {
                    Err(DomainError::EmptyField { field })
                } else {
                    Ok(raw.to_string())
                }
            }
            FieldId::Email => {
                if EMAIL_RE.is_match(raw) {
                    Ok(raw.to_string())
                } else {
                    Err(DomainError::InvalidEmail {
                        input: raw.to_string(),
                    })
                }
            }
            // License comes from a closed selection list and the free
            // sections accept anything, including the empty string.
            FieldId::Installation
            | FieldId::Usage
            | FieldId::License
            | FieldId::Contributing
            | FieldId::Tests => Ok(raw.to_string()),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
