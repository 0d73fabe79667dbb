use tracing::{error, info, warn};

use crate::app::AppState;
use crate::error::QaEmbedError;
use crate::models::api::{QaEmbedRequest, QaEmbedResponse};
use crate::models::record::EmbeddingRecord;

/// Embed the question and the answer, persist both vectors, and return them unchanged.
///
/// Nothing is written unless both embeddings succeed. A store failure after the
/// embeddings were computed leaves them unpersisted; the ids are logged so the
/// rows can be reconciled by hand.
pub async fn embed_and_store(
    state: &AppState,
    req: &QaEmbedRequest,
) -> Result<QaEmbedResponse, QaEmbedError> {
    // 1. Embed both texts. The calls are independent.
    let (question_embedding, answer_embedding) = tokio::try_join!(
        state.embedding_model.embed_text(&req.question),
        state.embedding_model.embed_text(&req.answer),
    )
    .map_err(|e| {
        error!(session_id = %req.session_id, "Embedding error: {e:#}");
        QaEmbedError::Embedding(format!("{e:#}"))
    })?;

    // 2. Persist both rows in one insert.
    let records = [
        EmbeddingRecord::new(&req.question_id, &req.session_id, question_embedding),
        EmbeddingRecord::new(&req.answer_id, &req.session_id, answer_embedding),
    ];

    if let Err(e) = state.embedding_store.insert_records(&records).await {
        error!(table = %state.embedding_store.table(), "Supabase insert error: {e:#}");
        warn!(
            session_id = %req.session_id,
            question_id = %req.question_id,
            answer_id = %req.answer_id,
            model = %state.embedding_model.model_name(),
            "embeddings computed but not persisted"
        );
        return Err(QaEmbedError::Persistence(format!("{e:#}")));
    }

    info!(
        session_id = %req.session_id,
        question_id = %req.question_id,
        answer_id = %req.answer_id,
        "Stored question/answer embeddings"
    );

    let [question, answer] = records;
    Ok(QaEmbedResponse::ok(question.embedding, answer.embedding))
}
