//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Walk the questionnaire, validating each answer inline
//! 2. Render the document from the complete answer set
//! 3. Write it through the document sink
//!
//! It uses the driven ports (`PromptSource`, `DocumentSink`) and holds
//! the only retry loop in the system: an invalid answer re-asks the
//! same question until it passes.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{DocumentSink, PromptSource},
    domain::{AnswerSet, AnswerValidator, Question, QuestionKind, render},
    error::ReadmegenResult,
};

/// Prompt flow state.
///
/// The flow is strictly linear: `Idle`, then one `Prompting(i)` state
/// per question index, then `Complete`. Abortion is represented by an
/// early error return from the source, not by a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Idle,
    Prompting(usize),
    Complete,
}

/// Main generation service.
///
/// Orchestrates the questionnaire, rendering, and writing workflow.
pub struct GenerateService {
    prompts: Box<dyn PromptSource>,
    sink: Box<dyn DocumentSink>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(prompts: Box<dyn PromptSource>, sink: Box<dyn DocumentSink>) -> Self {
        Self { prompts, sink }
    }

    /// Run the full pipeline: collect answers, render, write.
    ///
    /// Returns the rendered document so callers can display or inspect
    /// it. Nothing is written unless the answer set completed and the
    /// render succeeded.
    #[instrument(skip_all, fields(output = %output_path.display()))]
    pub fn generate(
        &mut self,
        questions: &[Question],
        output_path: &Path,
    ) -> ReadmegenResult<String> {
        let answers = self.collect(questions)?;
        debug_assert!(answers.is_complete());

        let document = render(&answers)?;
        self.sink.write(output_path, &document)?;

        info!(bytes = document.len(), "Document written");
        Ok(document)
    }

    /// Drive the prompt state machine to completion.
    ///
    /// Each question is asked until its answer validates; an answer is
    /// recorded exactly once per field. Any error from the prompt
    /// source (closed stream, cancelled session) aborts the whole flow.
    pub fn collect(&mut self, questions: &[Question]) -> ReadmegenResult<AnswerSet> {
        let mut answers = AnswerSet::new();
        let mut state = PromptState::Idle;

        loop {
            state = match state {
                PromptState::Idle => PromptState::Prompting(0),
                PromptState::Prompting(i) if i == questions.len() => PromptState::Complete,
                PromptState::Prompting(i) => {
                    let question = &questions[i];
                    let accepted = self.ask_until_valid(question)?;
                    answers.insert(question.field, accepted)?;
                    PromptState::Prompting(i + 1)
                }
                PromptState::Complete => {
                    info!(answers = answers.len(), "Questionnaire complete");
                    return Ok(answers);
                }
            };
        }
    }

    /// The per-question retry loop.
    fn ask_until_valid(&mut self, question: &Question) -> ReadmegenResult<String> {
        loop {
            let raw = match question.kind {
                QuestionKind::FreeText => self.prompts.free_text(question)?,
                QuestionKind::SingleChoice => self.prompts.single_choice(question)?,
            };

            // Defaults apply only to an exactly-empty answer; whitespace
            // counts as a deliberate answer and is kept literally.
            let candidate = match (&question.default, raw.is_empty()) {
                (Some(default), true) => default.clone(),
                _ => raw,
            };

            match AnswerValidator::validate(question.field, &candidate) {
                Ok(accepted) => {
                    debug!(field = %question.field, "Answer accepted");
                    return Ok(accepted);
                }
                Err(rejection) => {
                    debug!(field = %question.field, %rejection, "Answer rejected");
                    self.prompts.report_invalid(&rejection.to_string())?;
                }
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{FieldId, questionnaire};
    use std::collections::VecDeque;
    use std::path::PathBuf;

    use std::sync::{Arc, Mutex};

    /// Minimal in-crate test doubles. The reusable adapters live in
    /// `readmegen-adapters`; these exist so the service is testable
    /// without a crate cycle.
    struct FakePrompts {
        responses: VecDeque<String>,
        rejections: Arc<Mutex<Vec<String>>>,
    }

    impl FakePrompts {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                rejections: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn rejections(&self) -> Arc<Mutex<Vec<String>>> {
            self.rejections.clone()
        }

        fn next(&mut self) -> ReadmegenResult<String> {
            self.responses
                .pop_front()
                .ok_or_else(|| {
                    ApplicationError::InputStream {
                        reason: "script exhausted".into(),
                    }
                    .into()
                })
        }
    }

    impl PromptSource for FakePrompts {
        fn free_text(&mut self, _question: &Question) -> ReadmegenResult<String> {
            self.next()
        }

        fn single_choice(&mut self, _question: &Question) -> ReadmegenResult<String> {
            self.next()
        }

        fn report_invalid(&mut self, message: &str) -> ReadmegenResult<()> {
            self.rejections.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    /// Discards everything; used where the test only cares about answers.
    #[derive(Default)]
    struct FakeSink;

    impl DocumentSink for FakeSink {
        fn write(&mut self, _path: &Path, _content: &str) -> ReadmegenResult<()> {
            Ok(())
        }
    }

    fn demo_script() -> Vec<&'static str> {
        vec![
            "Demo",
            "A demo app",
            "", // installation → default
            "run it",
            "MIT",
            "",
            "", // tests → default
            "octocat",
            "octocat@example.com",
        ]
    }

    #[test]
    fn complete_run_collects_all_answers() {
        let mut service = GenerateService::new(
            Box::new(FakePrompts::new(&demo_script())),
            Box::new(FakeSink::default()),
        );
        let answers = service.collect(&questionnaire()).unwrap();
        assert!(answers.is_complete());
        assert_eq!(answers.get(FieldId::Title), Some("Demo"));
        assert_eq!(answers.get(FieldId::Installation), Some("npm install"));
        assert_eq!(answers.get(FieldId::Tests), Some("npm test"));
    }

    #[test]
    fn invalid_answer_is_reported_and_reasked() {
        let mut script = vec!["", "   ", "Demo"];
        script.extend_from_slice(&demo_script()[1..]);
        let prompts = FakePrompts::new(&script);
        let rejections = prompts.rejections();
        let mut service = GenerateService::new(Box::new(prompts), Box::new(FakeSink::default()));

        let answers = service.collect(&questionnaire()).unwrap();
        assert_eq!(answers.get(FieldId::Title), Some("Demo"));

        let rejections = rejections.lock().unwrap();
        assert_eq!(rejections.len(), 2);
        assert_eq!(rejections[0], "Project title is required!");
    }

    #[test]
    fn invalid_email_retries_until_valid() {
        let mut script = demo_script();
        // Replace the email answer with two bad attempts then a good one.
        script.pop();
        script.extend_from_slice(&["not-an-email", "a@b", "dev@example.com"]);
        let mut service = GenerateService::new(
            Box::new(FakePrompts::new(&script)),
            Box::new(FakeSink::default()),
        );
        let answers = service.collect(&questionnaire()).unwrap();
        assert_eq!(answers.get(FieldId::Email), Some("dev@example.com"));
    }

    #[test]
    fn whitespace_only_installation_bypasses_default() {
        let mut script = demo_script();
        script[2] = "   ";
        let mut service = GenerateService::new(
            Box::new(FakePrompts::new(&script)),
            Box::new(FakeSink::default()),
        );
        let answers = service.collect(&questionnaire()).unwrap();
        assert_eq!(answers.get(FieldId::Installation), Some("   "));
    }

    #[test]
    fn exhausted_input_aborts_without_answers() {
        let mut service = GenerateService::new(
            Box::new(FakePrompts::new(&["Demo", "desc"])),
            Box::new(FakeSink::default()),
        );
        let result = service.collect(&questionnaire());
        assert!(result.is_err());
    }

    #[test]
    fn nothing_is_written_when_collection_aborts() {
        // The sink is moved into the service, so observe through a probe
        // wrapper that records into a shared flag.
        use std::sync::atomic::{AtomicBool, Ordering};

        struct ProbeSink(Arc<AtomicBool>);
        impl DocumentSink for ProbeSink {
            fn write(&mut self, _path: &Path, _content: &str) -> ReadmegenResult<()> {
                self.0.store(true, Ordering::SeqCst);
                Ok(())
            }
        }

        let wrote = Arc::new(AtomicBool::new(false));
        let mut service = GenerateService::new(
            Box::new(FakePrompts::new(&["Demo"])),
            Box::new(ProbeSink(wrote.clone())),
        );
        assert!(
            service
                .generate(&questionnaire(), Path::new("README.md"))
                .is_err()
        );
        assert!(!wrote.load(Ordering::SeqCst));
    }

    #[test]
    fn generate_writes_rendered_document() {
        #[derive(Clone)]
        struct SharedSink(Arc<Mutex<Vec<(PathBuf, String)>>>);
        impl DocumentSink for SharedSink {
            fn write(&mut self, path: &Path, content: &str) -> ReadmegenResult<()> {
                self.0
                    .lock()
                    .unwrap()
                    .push((path.to_path_buf(), content.to_string()));
                Ok(())
            }
        }

        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = SharedSink(written.clone());
        let mut service =
            GenerateService::new(Box::new(FakePrompts::new(&demo_script())), Box::new(sink));

        let document = service
            .generate(&questionnaire(), Path::new("README.md"))
            .unwrap();

        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("README.md"));
        assert_eq!(written[0].1, document);
        assert!(document.starts_with("# Demo\n"));
    }
}
