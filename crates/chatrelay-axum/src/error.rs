//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as a JSON body of the form
//! `{"error": "<message>"}` with a 400 or 500 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chatrelay_core::RelayError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Axum-specific error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert a relay failure into a response error, logging upstream
    /// failures with their raw text.
    pub fn from_relay(err: RelayError) -> Self {
        match err {
            RelayError::MissingMessage => Self::BadRequest(err.to_string()),
            RelayError::Upstream(ref cause) => {
                error!("Error processing chat request: {cause}");
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<RelayError> for HttpError {
    fn from(err: RelayError) -> Self {
        Self::from_relay(err)
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
