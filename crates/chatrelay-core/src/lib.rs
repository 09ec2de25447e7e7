#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{ChatMessage, Conversation, GenerationParams, MessageRole};
pub use ports::{Completion, CompletionError, CompletionPort, CompletionRequest};
pub use prompt::{DEFAULT_SYSTEM_PROMPT, SystemPrompt};
pub use services::{RelayError, RelayService};
pub use settings::{
    API_KEY_VAR, BASE_URL_VAR, DEFAULT_MODEL, MODEL_VAR, ProviderSettings, SettingsError,
};

// Silence unused dev-dependency warnings for helpers only some tests use
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
