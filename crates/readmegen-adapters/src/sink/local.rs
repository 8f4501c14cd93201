//! Local filesystem sink using std::fs.

use std::path::Path;

use tracing::debug;

use readmegen_core::{
    application::{ApplicationError, ports::DocumentSink},
    error::ReadmegenResult,
};

/// Production document sink writing through `std::fs`.
///
/// Overwrites the target unconditionally; the write is a single
/// `std::fs::write` call, so no partially flushed document is ever
/// observable on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDocumentSink;

impl LocalDocumentSink {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSink for LocalDocumentSink {
    fn write(&mut self, path: &Path, content: &str) -> ReadmegenResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "Writing document");
        std::fs::write(path, content).map_err(|e| {
            ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
