//! Document sink adapters.

pub mod local;
pub mod memory;

pub use local::LocalDocumentSink;
pub use memory::MemorySink;
