//! Readmegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the readmegen
//! README generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         readmegen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (GenerateService)             │
//! │   Prompt flow → render → write          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: PromptSource, DocumentSink) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   readmegen-adapters (Infrastructure)   │
//! │ (InteractivePrompts, LocalDocumentSink) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Question, AnswerSet, License, render) │
//! │          No I/O Dependencies            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use readmegen_core::{
//!     application::GenerateService,
//!     domain::questionnaire,
//! };
//!
//! // Adapters injected from readmegen-adapters.
//! let mut service = GenerateService::new(prompts, sink);
//! service.generate(&questionnaire(), Path::new("README.md"))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{DocumentSink, PromptSource},
    };
    pub use crate::domain::{
        AnswerSet, AnswerValidator, FieldId, License, Question, QuestionKind, questionnaire,
        render,
    };
    pub use crate::error::{ReadmegenError, ReadmegenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
