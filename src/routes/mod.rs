pub mod health;
pub mod qa_embed;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::app::AppState;

/// Build all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(qa_embed::routes())
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// Browsers refuse a `*` wildcard on credentialed requests, so the request's own
/// values are echoed back instead.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt; // for `oneshot`

    use crate::testing::{test_state, RecordingStore, StaticEmbeddingModel};

    #[tokio::test]
    async fn test_preflight_allows_any_origin_with_credentials() {
        let state = test_state(
            Arc::new(StaticEmbeddingModel::new(&[])),
            Arc::new(RecordingStore::default()),
        );
        let app = build_router(Arc::new(state)).layer(permissive_cors());

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/qa-embed")
            .header("origin", "https://frontend.example")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type,x-session")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "https://frontend.example"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-allow-methods"], "POST");
        assert_eq!(
            headers["access-control-allow-headers"],
            "content-type,x-session"
        );
    }
}
