use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "qa-embed.toml";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

// ──────────────────────────── TOML structure ────────────────────────────

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_model")]
    pub model: String,
    /// Expected vector length. Left unset, whatever the provider returns is accepted.
    #[serde(default)]
    pub dimensions: Option<u32>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: default_embedding_model(),
            dimensions: None,
        }
    }
}

fn default_embedding_model() -> String {
    "text-embedding-3-large".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
        }
    }
}

fn default_table() -> String {
    "ManagementAI_Embeddings".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

// ──────────────────────────── Resolved Settings ────────────────────────────

/// Flat settings structure resolved from TOML + environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    // API
    pub host: String,
    pub port: u16,

    // Service
    pub environment: String,

    // Embedding provider
    pub embedding_model: String,
    pub embedding_dimensions: Option<u32>,
    pub openai_api_key: String,
    pub openai_base_url: String,

    // Store
    pub supabase_url: String,
    pub supabase_key: String,
    pub embeddings_table: String,

    // Outbound HTTP
    pub request_timeout_secs: u64,

    // CORS
    pub cors_enabled: bool,
}

fn required_env(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => anyhow::bail!("{name} environment variable is required"),
    }
}

/// Load `.env` into the process environment, then resolve the TOML path from
/// `QA_EMBED_CONFIG`. Must run before anything else reads the environment.
///
/// `None` searches for `.env` from the working directory upwards.
pub fn init_environment(dotenv_path: Option<&Path>) -> PathBuf {
    // Load .env if present (ignore errors)
    let _ = match dotenv_path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };

    std::env::var("QA_EMBED_CONFIG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load settings from a given TOML path. A missing file yields the defaults.
pub fn load_settings_from_path(path: impl AsRef<Path>) -> anyhow::Result<Settings> {
    let config: TomlConfig = match std::fs::read_to_string(path.as_ref()) {
        Ok(content) => toml::from_str(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TomlConfig::default(),
        Err(e) => return Err(e.into()),
    };

    let supabase_url = required_env("SUPABASE_URL")?;
    let supabase_key = required_env("SUPABASE_KEY")?;
    let openai_api_key = required_env("OPENAI_API_KEY")?;

    let openai_base_url = std::env::var("OPENAI_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

    if config.embedding.dimensions == Some(0) {
        anyhow::bail!("embedding.dimensions must be greater than zero when set");
    }

    Ok(Settings {
        host: config.api.host,
        port: config.api.port,
        environment: config.service.environment,
        embedding_model: config.embedding.model,
        embedding_dimensions: config.embedding.dimensions,
        openai_api_key,
        openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
        supabase_url: supabase_url.trim_end_matches('/').to_string(),
        supabase_key,
        embeddings_table: config.store.table,
        request_timeout_secs: config.http.request_timeout_secs,
        cors_enabled: config.cors.enabled,
    })
}
