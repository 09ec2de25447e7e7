//! Groq client implementing the core completion port.

use async_trait::async_trait;
use chatrelay_core::{Completion, CompletionError, CompletionPort, CompletionRequest};
use reqwest::Url;
use tracing::debug;

use crate::config::GroqClientConfig;
use crate::error::{GroqError, GroqResult};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, api_error_message};

/// Client for Groq's chat completions API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: Url,
    config: GroqClientConfig,
}

impl GroqClient {
    /// Build a client. Fails on an empty key, an unusable base URL, or if the
    /// HTTP client cannot be constructed.
    pub fn new(config: GroqClientConfig) -> GroqResult<Self> {
        if config.api_key().trim().is_empty() {
            return Err(GroqError::InvalidConfig("API key is empty".to_string()));
        }

        let endpoint = completions_url(config.base_url())?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Send one completion request and decode the response body.
    async fn create(&self, body: &ChatCompletionRequest<'_>) -> GroqResult<ChatCompletionResponse> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(self.config.api_key())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GroqError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn first_choice_text(&self, request: &CompletionRequest) -> GroqResult<String> {
        let response = self.create(&ChatCompletionRequest::from(request)).await?;

        if let Some(usage) = &response.usage {
            debug!(
                id = ?response.id,
                model = ?response.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Groq completion received"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(GroqError::EmptyChoices)?;

        debug!(finish_reason = ?choice.finish_reason, "First choice selected");

        choice.message.content.ok_or(GroqError::MissingContent)
    }
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CompletionPort for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError> {
        debug!(model = %request.model, endpoint = %self.endpoint, "Groq API request");

        self.first_choice_text(&request)
            .await
            .map(Completion::new)
            .map_err(CompletionError::from)
    }
}

/// Resolve `{base}/chat/completions`, tolerating a trailing slash on the base.
fn completions_url(base_url: &str) -> GroqResult<Url> {
    let trimmed = base_url.trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/chat/completions"))
        .map_err(|e| GroqError::InvalidConfig(format!("invalid base URL '{base_url}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GroqError::InvalidConfig(format!(
            "unsupported URL scheme '{other}' in '{base_url}'"
        ))),
    }
}
