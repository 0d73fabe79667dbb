mod app;
mod config;
mod embedding;
mod error;
mod models;
mod qa;
mod routes;
mod store;
#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::AppState;
use config::{init_environment, load_settings_from_path};
use embedding::openai::OpenAIEmbeddingModel;
use store::supabase::SupabaseStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first: RUST_LOG and QA_EMBED_CONFIG may come from it.
    let config_path = init_environment(None);

    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting qa-embed server...");

    // Load configuration. Missing credentials stop the process here.
    let settings = load_settings_from_path(&config_path)?;
    info!(
        "Configuration loaded: environment={}, host={}, port={}",
        settings.environment, settings.host, settings.port
    );

    let timeout = Duration::from_secs(settings.request_timeout_secs);

    // Initialize embedding model.
    let embedding_model: Arc<dyn embedding::EmbeddingModel> = Arc::new(OpenAIEmbeddingModel::new(
        &settings.embedding_model,
        &settings.openai_api_key,
        &settings.openai_base_url,
        settings.embedding_dimensions,
        timeout,
    )?);
    info!("Embedding model initialized: {}", settings.embedding_model);

    // Initialize store.
    let embedding_store: Arc<dyn store::EmbeddingStore> = Arc::new(SupabaseStore::new(
        &settings.supabase_url,
        &settings.supabase_key,
        &settings.embeddings_table,
        timeout,
    )?);
    info!("Supabase store initialized: table={}", settings.embeddings_table);

    // Build application state.
    let state = Arc::new(AppState {
        embedding_model,
        embedding_store,
    });

    // Build router.
    let mut app = routes::build_router(state);
    if settings.cors_enabled {
        app = app.layer(routes::permissive_cors());
    }
    let app = app.layer(TraceLayer::new_for_http());

    // Start server.
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
