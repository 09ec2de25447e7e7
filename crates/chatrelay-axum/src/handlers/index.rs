//! Status endpoint.

use axum::Json;

use crate::dto::StatusResponse;

/// GET / - report that the API is up and how to use it.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}
