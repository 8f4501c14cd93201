//! The questionnaire and its answers.
//!
//! A [`Question`] is immutable once built; the ordered sequence returned
//! by [`questionnaire`] is constructed once at process start and drives
//! the whole prompt flow. Answers accumulate in an [`AnswerSet`], one
//! write-once entry per field, in question order.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::license::License;

/// Fallback installation command when the operator submits an empty answer.
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";

/// Fallback test command when the operator submits an empty answer.
pub const DEFAULT_TEST_COMMAND: &str = "npm test";

// ── Field identifiers ─────────────────────────────────────────────────────────

/// Closed set of question identifiers, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Title,
    Description,
    Installation,
    Usage,
    License,
    Contributing,
    Tests,
    Github,
    Email,
}

impl FieldId {
    /// Stable string key, usable in logs and serialized answer sets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Installation => "installation",
            Self::Usage => "usage",
            Self::License => "license",
            Self::Contributing => "contributing",
            Self::Tests => "tests",
            Self::Github => "github",
            Self::Email => "email",
        }
    }

    /// Message shown when a required field is left blank.
    ///
    /// The three required free-text fields keep their original wording;
    /// the generic message exists only for programmatic construction of
    /// [`DomainError::EmptyField`] with other fields.
    pub fn required_message(&self) -> &'static str {
        match self {
            Self::Title => "Project title is required!",
            Self::Description => "Description is required!",
            Self::Github => "GitHub username is required!",
            _ => "This field is required!",
        }
    }

    /// All fields, in question order.
    pub const ALL: [FieldId; 9] = [
        Self::Title,
        Self::Description,
        Self::Installation,
        Self::Usage,
        Self::License,
        Self::Contributing,
        Self::Tests,
        Self::Github,
        Self::Email,
    ];
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Questions ─────────────────────────────────────────────────────────────────

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-form line input.
    FreeText,
    /// Selection from a closed, ordered choice list.
    SingleChoice,
}

/// A single prompt definition.
#[derive(Debug, Clone)]
pub struct Question {
    pub field: FieldId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    /// Only populated for [`QuestionKind::SingleChoice`].
    pub choices: &'static [&'static str],
    /// Substituted when the submitted answer is exactly empty.
    /// Whitespace-only input is *not* defaulted; it is kept literally.
    pub default: Option<String>,
}

impl Question {
    fn free_text(field: FieldId, prompt: &'static str) -> Self {
        Self {
            field,
            prompt,
            kind: QuestionKind::FreeText,
            choices: &[],
            default: None,
        }
    }

    fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Build the ordered questionnaire.
///
/// Called once at startup; the returned sequence is treated as immutable
/// from then on.
pub fn questionnaire() -> Vec<Question> {
    vec![
        Question::free_text(FieldId::Title, "What is your project title?"),
        Question::free_text(FieldId::Description, "Provide a description of your project:"),
        Question::free_text(FieldId::Installation, "What are the installation instructions?")
            .with_default(DEFAULT_INSTALL_COMMAND),
        Question::free_text(FieldId::Usage, "How do you use this project?"),
        Question {
            field: FieldId::License,
            prompt: "Choose a license for your project:",
            kind: QuestionKind::SingleChoice,
            choices: License::CHOICES,
            default: None,
        },
        Question::free_text(
            FieldId::Contributing,
            "How can others contribute to this project?",
        ),
        Question::free_text(FieldId::Tests, "What commands should be run for tests?")
            .with_default(DEFAULT_TEST_COMMAND),
        Question::free_text(FieldId::Github, "What is your GitHub username?"),
        Question::free_text(FieldId::Email, "What is your email address?"),
    ]
}

// ── Answers ───────────────────────────────────────────────────────────────────

/// Validated answers, keyed by field.
///
/// Entries are write-once: the prompt flow inserts each answer exactly
/// once, after validation, in question order. Rendering requires the set
/// to be complete.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    entries: HashMap<FieldId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Fails if the field already has one.
    pub fn insert(&mut self, field: FieldId, answer: impl Into<String>) -> Result<(), DomainError> {
        if self.entries.contains_key(&field) {
            return Err(DomainError::DuplicateAnswer { field });
        }
        self.entries.insert(field, answer.into());
        Ok(())
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Look up an answer that must exist by the time rendering runs.
    pub fn require(&self, field: FieldId) -> Result<&str, DomainError> {
        self.get(field)
            .ok_or(DomainError::MissingAnswer { field })
    }

    /// `true` once every field has an answer.
    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.entries.contains_key(f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_has_nine_questions_in_order() {
        let questions = questionnaire();
        let order: Vec<FieldId> = questions.iter().map(|q| q.field).collect();
        assert_eq!(order, FieldId::ALL);
    }

    #[test]
    fn license_is_the_only_single_choice_question() {
        for q in questionnaire() {
            match q.field {
                FieldId::License => {
                    assert_eq!(q.kind, QuestionKind::SingleChoice);
                    assert_eq!(q.choices, License::CHOICES);
                }
                _ => assert_eq!(q.kind, QuestionKind::FreeText),
            }
        }
    }

    #[test]
    fn only_installation_and_tests_have_defaults() {
        for q in questionnaire() {
            match q.field {
                FieldId::Installation => {
                    assert_eq!(q.default.as_deref(), Some(DEFAULT_INSTALL_COMMAND));
                }
                FieldId::Tests => {
                    assert_eq!(q.default.as_deref(), Some(DEFAULT_TEST_COMMAND));
                }
                _ => assert!(q.default.is_none(), "unexpected default on {}", q.field),
            }
        }
    }

    #[test]
    fn answers_are_write_once() {
        let mut answers = AnswerSet::new();
        answers.insert(FieldId::Title, "Demo").unwrap();
        assert!(matches!(
            answers.insert(FieldId::Title, "Other"),
            Err(DomainError::DuplicateAnswer {
                field: FieldId::Title
            })
        ));
        // First value survives.
        assert_eq!(answers.get(FieldId::Title), Some("Demo"));
    }

    #[test]
    fn require_reports_missing_field() {
        let answers = AnswerSet::new();
        assert!(matches!(
            answers.require(FieldId::Email),
            Err(DomainError::MissingAnswer {
                field: FieldId::Email
            })
        ));
    }

    #[test]
    fn completeness_needs_every_field() {
        let mut answers = AnswerSet::new();
        assert!(!answers.is_complete());
        for field in FieldId::ALL {
            answers.insert(field, "x").unwrap();
        }
        assert!(answers.is_complete());
        assert_eq!(answers.len(), 9);
    }
}
