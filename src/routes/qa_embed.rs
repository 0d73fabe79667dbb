use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::QaEmbedError;
use crate::models::api::{QaEmbedRequest, QaEmbedResponse};
use crate::qa::embed_and_store;

/// Question/answer embedding routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/qa-embed", post(qa_embed))
}

/// POST /qa-embed - Embed a question/answer pair and store both vectors.
async fn qa_embed(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QaEmbedRequest>,
) -> Result<Json<QaEmbedResponse>, QaEmbedError> {
    let resp = embed_and_store(&state, &req).await?;
    Ok(Json(resp))
}
