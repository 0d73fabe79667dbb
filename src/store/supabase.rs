use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::EmbeddingStore;
use crate::models::record::EmbeddingRecord;

/// Supabase table client over the PostgREST HTTP API.
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    table: String,
    http_client: reqwest::Client,
}

/// PostgREST error payload.
#[derive(Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl PostgrestError {
    fn describe(&self) -> String {
        let mut out = self.message.clone();
        if let Some(code) = &self.code {
            out.push_str(&format!(" (code {code})"));
        }
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!(": {details}"));
        }
        if let Some(hint) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            out.push_str(&format!(" hint: {hint}"));
        }
        out
    }
}

impl SupabaseStore {
    pub fn new(base_url: &str, api_key: &str, table: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
            http_client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl EmbeddingStore for SupabaseStore {
    async fn insert_records(&self, records: &[EmbeddingRecord]) -> anyhow::Result<()> {
        let resp = self
            .http_client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(records)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<PostgrestError>(&body)
                .map(|e| e.describe())
                .unwrap_or(body);
            anyhow::bail!("{message} (HTTP {status})");
        }

        debug!(table = %self.table, rows = records.len(), "rows inserted");
        Ok(())
    }

    fn table(&self) -> &str {
        &self.table
    }
}
