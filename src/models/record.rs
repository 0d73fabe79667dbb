use serde::{Deserialize, Serialize};

/// One row of the embeddings table. Column names follow the table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    #[serde(rename = "MessageID")]
    pub message_id: String,
    #[serde(rename = "SessionID")]
    pub session_id: String,
    #[serde(rename = "Embedding")]
    pub embedding: Vec<f32>,
}

impl EmbeddingRecord {
    pub fn new(message_id: &str, session_id: &str, embedding: Vec<f32>) -> Self {
        Self {
            message_id: message_id.to_string(),
            session_id: session_id.to_string(),
            embedding,
        }
    }
}
