//! Completion port for the external language-model provider.
//!
//! The relay hands a fully built request to the provider and gets back the
//! text of the first choice. How the request travels (HTTP, auth headers,
//! wire format) is the adapter's business.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Conversation, GenerationParams};

/// Everything the provider needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Provider model identifier (e.g. `llama-3.1-8b-instant`).
    pub model: String,
    pub conversation: Conversation,
    pub params: GenerationParams,
}

/// Text of the provider's first completion choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
}

impl Completion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Errors that can occur while asking the provider for a completion.
///
/// None of these are retried. The `Display` text is shown to the caller
/// after `"An error occurred: "`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// The request never got a response (DNS, connect, TLS, timeout).
    #[error("Connection error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    /// The provider answered 2xx but the body was not a usable completion.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Anything else, reported verbatim.
    #[error("{0}")]
    Other(String),
}

/// Port for the external completion provider.
///
/// Implementations must be safe to share across concurrent requests; the
/// relay holds one instance for the process lifetime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Submit a conversation and return the first choice's text.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError>;
}
