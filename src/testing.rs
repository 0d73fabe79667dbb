//! In-process fakes for the provider and store seams.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::app::AppState;
use crate::embedding::EmbeddingModel;
use crate::models::api::QaEmbedRequest;
use crate::models::record::EmbeddingRecord;
use crate::store::EmbeddingStore;

/// Returns a fixed vector per input text.
pub struct StaticEmbeddingModel {
    vectors: HashMap<String, Vec<f32>>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl StaticEmbeddingModel {
    pub fn new(vectors: &[(&str, Vec<f32>)]) -> Self {
        Self {
            vectors: vectors
                .iter()
                .map(|(text, v)| (text.to_string(), v.clone()))
                .collect(),
            failing: vec![],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn scenario() -> Self {
        Self::new(&[("What is 2+2?", vec![0.1, 0.2]), ("4", vec![0.9, 0.8])])
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.push(text.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingModel for StaticEmbeddingModel {
    async fn embed_text(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|t| t == text) {
            anyhow::bail!("provider unavailable");
        }
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no vector for {text:?}"))
    }

    fn model_name(&self) -> &str {
        "static-test-model"
    }
}

/// Records every insert batch; optionally rejects them.
#[derive(Default)]
pub struct RecordingStore {
    batches: Mutex<Vec<Vec<EmbeddingRecord>>>,
    failure: Option<String>,
}

impl RecordingStore {
    pub fn failing(message: &str) -> Self {
        Self {
            batches: Mutex::new(vec![]),
            failure: Some(message.to_string()),
        }
    }

    pub fn batches(&self) -> Vec<Vec<EmbeddingRecord>> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbeddingStore for RecordingStore {
    async fn insert_records(&self, records: &[EmbeddingRecord]) -> anyhow::Result<()> {
        self.batches.lock().unwrap().push(records.to_vec());
        match &self.failure {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(()),
        }
    }

    fn table(&self) -> &str {
        "ManagementAI_Embeddings"
    }
}

pub fn test_state(
    embedding_model: Arc<dyn EmbeddingModel>,
    embedding_store: Arc<dyn EmbeddingStore>,
) -> AppState {
    AppState {
        embedding_model,
        embedding_store,
    }
}

pub fn scenario_request() -> QaEmbedRequest {
    QaEmbedRequest {
        question: "What is 2+2?".to_string(),
        question_id: "q1".to_string(),
        answer: "4".to_string(),
        answer_id: "a1".to_string(),
        session_id: "s1".to_string(),
    }
}
