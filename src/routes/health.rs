use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::models::api::HealthResponse;

/// Liveness routes. These never touch the provider or the store.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(health))
}

/// GET /
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
