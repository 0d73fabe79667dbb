use std::sync::Arc;

use crate::embedding::EmbeddingModel;
use crate::store::EmbeddingStore;

/// Shared application state passed to all route handlers. Read-only after startup.
pub struct AppState {
    pub embedding_model: Arc<dyn EmbeddingModel>,
    pub embedding_store: Arc<dyn EmbeddingStore>,
}
