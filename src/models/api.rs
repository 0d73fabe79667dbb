use serde::{Deserialize, Serialize};

// ──────────────────────────── QA embed ────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaEmbedRequest {
    pub question: String,
    pub question_id: String,
    pub answer: String,
    pub answer_id: String,
    /// Groups the two persisted rows; supplied by the caller.
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaEmbedResponse {
    pub status: String,
    pub question_embedding: Vec<f32>,
    pub answer_embedding: Vec<f32>,
}

impl QaEmbedResponse {
    pub fn ok(question_embedding: Vec<f32>, answer_embedding: Vec<f32>) -> Self {
        Self {
            status: "ok".to_string(),
            question_embedding,
            answer_embedding,
        }
    }
}

// ──────────────────────────── Health ────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

// ──────────────────────────── Errors ────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
