//! Infrastructure adapters for readmegen.
//!
//! This crate implements the ports defined in
//! `readmegen-core::application::ports`. It contains all terminal and
//! filesystem I/O.

pub mod prompt;
pub mod sink;

// Re-export commonly used adapters
pub use prompt::{InteractivePrompts, ScriptedPrompts};
pub use sink::{LocalDocumentSink, MemorySink};
