use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::api::ErrorResponse;

/// Failure kinds of the embed-and-store operation. `Display` is the client-facing detail.
#[derive(Debug, Error)]
pub enum QaEmbedError {
    #[error("Embedding error: {0}")]
    Embedding(String),
    #[error("Supabase insert error: {0}")]
    Persistence(String),
}

impl IntoResponse for QaEmbedError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
