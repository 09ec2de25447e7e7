//! Wire types for the chat completions endpoint.

use chatrelay_core::{ChatMessage, CompletionRequest};
use serde::{Deserialize, Serialize};

/// Longest raw error body echoed back when the provider sent no JSON error.
const MAX_RAW_ERROR_CHARS: usize = 200;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub messages: &'a [ChatMessage],
    pub model: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    /// Serialized as `null` when unset.
    pub stop: Option<&'a [String]>,
    pub stream: bool,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            messages: request.conversation.messages(),
            model: &request.model,
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
            top_p: request.params.top_p,
            stop: request.params.stop.as_deref(),
            stream: request.params.stream,
        }
    }
}

/// Non-streaming completion response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers the provider's `error.message`; falls back to the raw body,
/// truncated.
pub(crate) fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.chars().take(MAX_RAW_ERROR_CHARS).collect(),
    }
}
