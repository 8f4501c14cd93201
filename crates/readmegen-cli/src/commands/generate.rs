//! The one command readmegen has: run the questionnaire and write
//! `README.md`.
//!
//! Responsibility: wire adapters into the core service and display
//! results. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use readmegen_adapters::{InteractivePrompts, LocalDocumentSink};
use readmegen_core::{
    application::GenerateService,
    domain::{FieldId, Question, questionnaire},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Name of the generated file, always in the current working directory.
pub const OUTPUT_FILE: &str = "README.md";

/// Execute the generation flow.
///
/// Sequence:
/// 1. Show the welcome banner
/// 2. Build the questionnaire (config may override the fallback commands)
/// 3. Run the prompt flow to completion
/// 4. Render + write `README.md`
/// 5. Report the outcome
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output
        .header("Welcome to the Professional README Generator!")
        .with_cli_context(|| "failed to write banner")?;
    output
        .print("Please answer the following questions to generate your README.md file.")
        .with_cli_context(|| "failed to write banner")?;
    output.print("").with_cli_context(|| "failed to write banner")?;

    let questions = build_questionnaire(&config);
    debug!(questions = questions.len(), "Questionnaire ready");

    let prompts = Box::new(InteractivePrompts::with_color(output.supports_color()));
    let sink = Box::new(LocalDocumentSink::new());
    let mut service = GenerateService::new(prompts, sink);

    info!("Prompt flow started");
    service
        .generate(&questions, Path::new(OUTPUT_FILE))
        .map_err(CliError::Core)?;
    info!("Prompt flow completed");

    output
        .success("Successfully created README.md!")
        .with_cli_context(|| "failed to report outcome")?;

    Ok(())
}

/// Build the questionnaire, applying configured fallback commands.
fn build_questionnaire(config: &AppConfig) -> Vec<Question> {
    let mut questions = questionnaire();
    for question in &mut questions {
        match question.field {
            FieldId::Installation => {
                if let Some(cmd) = &config.defaults.installation_command {
                    question.default = Some(cmd.clone());
                }
            }
            FieldId::Tests => {
                if let Some(cmd) = &config.defaults.test_command {
                    question.default = Some(cmd.clone());
                }
            }
            _ => {}
        }
    }
    questions
}

// ── tests ─────────────────────────────────────────────────────────────────────
