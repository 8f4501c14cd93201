//! Application layer: orchestration of the prompt → render → write
//! pipeline, and the ports it needs from the outside world.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateService, PromptState};
