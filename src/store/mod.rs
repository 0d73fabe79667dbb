pub mod supabase;

use async_trait::async_trait;

use crate::models::record::EmbeddingRecord;

/// Abstract store for embedding rows.
#[async_trait]
pub trait EmbeddingStore: Send + Sync {
    /// Insert all records with a single call. Either every row is accepted or an error is returned.
    async fn insert_records(&self, records: &[EmbeddingRecord]) -> anyhow::Result<()>;

    /// Target table name, for logging.
    fn table(&self) -> &str;
}
