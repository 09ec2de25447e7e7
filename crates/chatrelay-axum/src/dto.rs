//! Request and response bodies.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed body of the status endpoint.
pub const STATUS_RUNNING: &str = "API is running";
pub const USAGE_HINT: &str = "Send POST requests to /chat endpoint";

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub usage: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            status: STATUS_RUNNING.to_string(),
            usage: USAGE_HINT.to_string(),
        }
    }
}

/// Body of `POST /chat`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Parse a raw body leniently.
    ///
    /// Anything that is not a JSON object with a string-or-null `message`
    /// yields a request with no message, which the relay rejects as missing.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|e| {
            debug!("Unusable chat request body: {e}");
            Self::default()
        })
    }
}

/// Successful `POST /chat` response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_extracts_message() {
        let request = ChatRequest::from_body(br#"{"message": "Hi", "extra": 1}"#);
        assert_eq!(request.message.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_from_body_missing_or_null() {
        assert_eq!(ChatRequest::from_body(b"{}").message, None);
        assert_eq!(ChatRequest::from_body(br#"{"message": null}"#).message, None);
    }

    #[test]
    fn test_from_body_garbage() {
        assert_eq!(ChatRequest::from_body(b"").message, None);
        assert_eq!(ChatRequest::from_body(b"not json").message, None);
        assert_eq!(ChatRequest::from_body(b"[1, 2]").message, None);
        assert_eq!(ChatRequest::from_body(br#"{"message": 42}"#).message, None);
    }

    #[test]
    fn test_from_body_keeps_whitespace() {
        let request = ChatRequest::from_body(br#"{"message": "  "}"#);
        assert_eq!(request.message.as_deref(), Some("  "));
    }

    #[test]
    fn test_status_response_shape() {
        let value = serde_json::to_value(StatusResponse::running()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "API is running",
                "usage": "Send POST requests to /chat endpoint"
            })
        );
    }
}
