//! Scripted prompt source for tests and non-interactive verification.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use readmegen_core::{
    application::{ApplicationError, ports::PromptSource},
    domain::Question,
    error::{ReadmegenError, ReadmegenResult},
};

/// Replays a fixed sequence of responses, one per prompt.
///
/// Selection answers must be the literal choice label; answering a
/// single-choice question with anything outside the list is treated as
/// a script bug and fails the run, mirroring the closed list of the
/// interactive UI.
pub struct ScriptedPrompts {
    responses: VecDeque<String>,
    rejections: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompts {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            rejections: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the validation messages shown so far.
    ///
    /// Cloneable before the source is boxed and moved into a service.
    pub fn rejections(&self) -> Arc<Mutex<Vec<String>>> {
        self.rejections.clone()
    }

    fn next(&mut self, question: &Question) -> ReadmegenResult<String> {
        self.responses.pop_front().ok_or_else(|| {
            ApplicationError::InputStream {
                reason: format!("script exhausted at '{}'", question.field),
            }
            .into()
        })
    }
}

impl PromptSource for ScriptedPrompts {
    fn free_text(&mut self, question: &Question) -> ReadmegenResult<String> {
        self.next(question)
    }

    fn single_choice(&mut self, question: &Question) -> ReadmegenResult<String> {
        let answer = self.next(question)?;
        if !question.choices.contains(&answer.as_str()) {
            return Err(ApplicationError::InputStream {
                reason: format!("'{answer}' is not a choice for '{}'", question.field),
            }
            .into());
        }
        Ok(answer)
    }

    fn report_invalid(&mut self, message: &str) -> ReadmegenResult<()> {
        let mut rejections = self.rejections.lock().map_err(|_| {
            ReadmegenError::from(ApplicationError::InputStream {
                reason: "rejection log poisoned".into(),
            })
        })?;
        rejections.push(message.to_string());
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
