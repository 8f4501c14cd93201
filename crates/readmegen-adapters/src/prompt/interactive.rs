//! Terminal prompt adapter built on `dialoguer`.

use std::io::ErrorKind;

use console::{Term, style};
use dialoguer::{Input, Select, theme::ColorfulTheme, theme::SimpleTheme, theme::Theme};
use tracing::instrument;

use readmegen_core::{
    application::{ApplicationError, ports::PromptSource},
    domain::Question,
    error::{ReadmegenError, ReadmegenResult},
};

/// Production prompt source: asks questions on the controlling terminal.
pub struct InteractivePrompts {
    theme: Box<dyn Theme>,
    term: Term,
    color: bool,
}

impl InteractivePrompts {
    /// Create a prompt source with colored output.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Create a prompt source, optionally without ANSI styling.
    pub fn with_color(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            theme,
            term: Term::stderr(),
            color,
        }
    }
}

impl Default for InteractivePrompts {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSource for InteractivePrompts {
    #[instrument(skip_all, fields(field = %question.field))]
    fn free_text(&mut self, question: &Question) -> ReadmegenResult<String> {
        let mut input = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question.prompt)
            .allow_empty(true);

        // Showing the default mirrors the prompt UX: pressing Enter on an
        // empty line accepts it. Whitespace-only input is a real answer
        // and bypasses the default.
        if let Some(default) = &question.default {
            input = input.default(default.clone()).show_default(true);
        }

        input.interact_text().map_err(map_prompt_err)
    }

    #[instrument(skip_all, fields(field = %question.field))]
    fn single_choice(&mut self, question: &Question) -> ReadmegenResult<String> {
        let index = Select::with_theme(self.theme.as_ref())
            .with_prompt(question.prompt)
            .items(question.choices)
            .default(0)
            .interact()
            .map_err(map_prompt_err)?;

        Ok(question.choices[index].to_string())
    }

    fn report_invalid(&mut self, message: &str) -> ReadmegenResult<()> {
        let line = if self.color {
            format!("{} {}", style("\u{2717}").red().bold(), style(message).red())
        } else {
            format!("\u{2717} {message}") // ✗
        };
        self.term.write_line(&line).map_err(|e| {
            ReadmegenError::from(ApplicationError::InputStream {
                reason: e.to_string(),
            })
        })
    }
}

/// Translate a `dialoguer` failure into an application error.
///
/// An interrupted read (Ctrl-C, closed stream) is an abort; anything
/// else is an input stream failure.
fn map_prompt_err(e: dialoguer::Error) -> ReadmegenError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == ErrorKind::Interrupted {
                ApplicationError::PromptAborted.into()
            } else {
                ApplicationError::InputStream {
                    reason: io_err.to_string(),
                }
                .into()
            }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Interactive paths need a TTY; only the error mapping is unit
    // testable here. The prompt flow itself is covered through
    // `ScriptedPrompts` in the integration tests.

    #[test]
    fn interrupted_read_maps_to_abort() {
        let err = map_prompt_err(dialoguer::Error::IO(std::io::Error::new(
            ErrorKind::Interrupted,
            "ctrl-c",
        )));
        assert!(matches!(
            err,
            ReadmegenError::Application(ApplicationError::PromptAborted)
        ));
    }

    #[test]
    fn other_io_errors_map_to_input_stream() {
        let err = map_prompt_err(dialoguer::Error::IO(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "closed",
        )));
        assert!(matches!(
            err,
            ReadmegenError::Application(ApplicationError::InputStream { .. })
        ));
    }
}
