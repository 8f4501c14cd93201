//! Prompt source adapters.

pub mod interactive;
pub mod scripted;

pub use interactive::InteractivePrompts;
pub use scripted::ScriptedPrompts;
