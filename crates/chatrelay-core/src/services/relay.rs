//! The relay: validate a message, wrap it in the persona conversation, ask
//! the provider, hand back the reply.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::{Conversation, GenerationParams};
use crate::ports::{CompletionError, CompletionPort, CompletionRequest};
use crate::prompt::SystemPrompt;

/// Failure of a single relay call.
///
/// Callers must handle both variants; there is no catch-all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    /// No usable message: absent, `null`, or empty.
    #[error("No message provided")]
    MissingMessage,

    /// The provider call failed.
    #[error("An error occurred: {0}")]
    Upstream(#[from] CompletionError),
}

/// Stateless relay between callers and the completion provider.
///
/// Built once at startup and shared by every request handler.
#[derive(Clone)]
pub struct RelayService {
    provider: Arc<dyn CompletionPort>,
    system_prompt: SystemPrompt,
    model: String,
    params: GenerationParams,
}

impl RelayService {
    pub fn new(
        provider: Arc<dyn CompletionPort>,
        system_prompt: SystemPrompt,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            system_prompt,
            model: model.into(),
            params: GenerationParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn system_prompt(&self) -> &SystemPrompt {
        &self.system_prompt
    }

    /// Build the provider request for a message that already passed validation.
    pub fn build_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            conversation: Conversation::new(self.system_prompt.as_str(), message),
            params: self.params.clone(),
        }
    }

    /// Relay one message and return the provider's reply text.
    pub async fn chat(&self, message: Option<&str>) -> Result<String, RelayError> {
        let message = match message {
            Some(m) if !m.is_empty() => m,
            _ => return Err(RelayError::MissingMessage),
        };

        debug!(
            model = %self.model,
            message_len = message.len(),
            "Submitting conversation to provider"
        );

        let completion = self.provider.complete(self.build_request(message)).await?;
        Ok(completion.content)
    }
}

impl std::fmt::Debug for RelayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayService")
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
