//! Error types for Groq operations.
//!
//! These errors are internal to `chatrelay-groq` and are mapped to the core
//! `CompletionError` at the port boundary.

use chatrelay_core::CompletionError;
use thiserror::Error;

/// Result type alias for Groq operations.
pub type GroqResult<T> = Result<T, GroqError>;

/// Errors related to Groq API operations.
#[derive(Debug, Error)]
pub enum GroqError {
    /// The client could not be configured (bad base URL, empty key).
    #[error("Invalid Groq client configuration: {0}")]
    InvalidConfig(String),

    /// API request failed with an HTTP error status.
    #[error("Error code: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider error message, or the raw body when it has none
        message: String,
    },

    /// The response decoded but had no choices.
    #[error("response contained no choices")]
    EmptyChoices,

    /// The first choice had no message content.
    #[error("first choice has no message content")]
    MissingContent,

    /// Network or HTTP client error.
    #[error("Connection error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<GroqError> for CompletionError {
    fn from(err: GroqError) -> Self {
        match err {
            GroqError::Api { status, message } => Self::Api { status, message },
            GroqError::Network(e) => Self::Network(e.to_string()),
            GroqError::JsonParse(e) => Self::MalformedResponse(e.to_string()),
            e @ (GroqError::EmptyChoices | GroqError::MissingContent) => {
                Self::MalformedResponse(e.to_string())
            }
            e @ GroqError::InvalidConfig(_) => Self::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_through() {
        let err: CompletionError = GroqError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        }
        .into();

        assert_eq!(
            err,
            CompletionError::Api {
                status: 429,
                message: "Rate limit reached".to_string()
            }
        );
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let err: CompletionError = GroqError::EmptyChoices.into();
        assert_eq!(
            err,
            CompletionError::MalformedResponse("response contained no choices".to_string())
        );
    }

    #[test]
    fn test_json_error_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CompletionError = GroqError::JsonParse(json_err).into();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = GroqError::InvalidConfig("API key is empty".to_string());
        assert!(err.to_string().contains("API key is empty"));
    }
}
