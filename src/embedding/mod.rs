pub mod openai;

use async_trait::async_trait;

/// Abstract embedding model interface.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Embed a single text. One provider call per invocation.
    async fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>>;

    /// Name of the provider model used for every call.
    fn model_name(&self) -> &str;
}
