//! In-memory document sink for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use readmegen_core::{
    application::{ApplicationError, ports::DocumentSink},
    error::ReadmegenResult,
};

/// In-memory sink for tests.
///
/// Cloneable: all clones share the same storage, so a test can keep a
/// handle while the service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    documents: HashMap<PathBuf, String>,
    fail_writes: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail, for error-path tests.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.inner.write().unwrap().fail_writes = true;
        sink
    }

    /// Read a written document back (testing helper).
    pub fn read(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.documents.get(path).cloned()
    }

    /// Number of documents written so far.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentSink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> ReadmegenResult<()> {
        let mut inner = self.inner.write().map_err(|_| {
            ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "sink lock poisoned".into(),
            }
        })?;

        if inner.fail_writes {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "simulated write failure".into(),
            }
            .into());
        }

        inner.documents.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
