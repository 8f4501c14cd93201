//! Core domain layer for readmegen.
//!
//! This module contains pure business logic with no I/O. Prompting and
//! file writing are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or external calls
//! - **Immutable questions**: The questionnaire is built once at startup
//! - **Pure rendering**: Same `AnswerSet` in, same document out

pub mod error;
pub mod license;
pub mod question;
pub mod render;
pub mod validation;

// Re-exports for convenience
pub use error::DomainError;
pub use license::License;
pub use question::{
    AnswerSet, DEFAULT_INSTALL_COMMAND, DEFAULT_TEST_COMMAND, FieldId, Question, QuestionKind,
    questionnaire,
};
pub use render::render;
pub use validation::AnswerValidator;
