//! Chat relay handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::debug;

use crate::dto::{ChatRequest, ChatResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// POST /chat - relay one message to the provider.
///
/// The body is read raw so that malformed JSON, a wrong content type, or a
/// non-string `message` all land on the same 400 as a missing message.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>, HttpError> {
    debug!("POST /chat ({} bytes)", body.len());

    let request = ChatRequest::from_body(&body);
    let reply = state
        .relay
        .chat(request.message.as_deref())
        .await
        .map_err(HttpError::from_relay)?;

    Ok(Json(ChatResponse { reply }))
}
