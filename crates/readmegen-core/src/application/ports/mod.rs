//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the
//! application needs from the outside world. Adapters in
//! `readmegen-adapters` implement these.
//!
//! Both ports here are driven (output) ports: called by
//! [`crate::application::GenerateService`], implemented by
//! infrastructure.

use std::path::Path;

use crate::domain::Question;
use crate::error::ReadmegenResult;

/// Port for obtaining answers from the operator.
///
/// Implemented by:
/// - `readmegen_adapters::prompt::InteractivePrompts` (production)
/// - `readmegen_adapters::prompt::ScriptedPrompts` (testing)
///
/// The retry loop lives in the service, not here: a source returns one
/// raw answer per call and the service decides whether to ask again.
pub trait PromptSource {
    /// Ask a free-text question and return the raw line entered.
    fn free_text(&mut self, question: &Question) -> ReadmegenResult<String>;

    /// Present a closed choice list and return the selected label.
    fn single_choice(&mut self, question: &Question) -> ReadmegenResult<String>;

    /// Show a validation message before the field is re-asked.
    fn report_invalid(&mut self, message: &str) -> ReadmegenResult<()>;
}

/// Port for persisting the rendered document.
///
/// Implemented by:
/// - `readmegen_adapters::sink::LocalDocumentSink` (production)
/// - `readmegen_adapters::sink::MemorySink` (testing)
pub trait DocumentSink {
    /// Write `content` to `path`, overwriting unconditionally.
    ///
    /// A single atomic call from the caller's perspective: no partial
    /// document is ever observable on failure.
    fn write(&mut self, path: &Path, content: &str) -> ReadmegenResult<()>;
}
