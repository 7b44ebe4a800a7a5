use anyhow::{bail, Context, Result};
use tracing::warn;

const DEFAULT_ADZUNA_BASE_URL: &str = "https://api.adzuna.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_JOB_SEARCH_TIMEOUT_SECS: u64 = 5;

/// Which resume optimizer backs `POST /resume/optimize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerMode {
    Static,
    Llm,
}

/// Application configuration loaded from environment variables.
/// Provider credentials are optional: without them the matching feature degrades
/// instead of blocking startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub adzuna_app_id: Option<String>,
    pub adzuna_api_key: Option<String>,
    pub adzuna_base_url: String,
    pub job_search_timeout_secs: u64,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub optimizer_mode: OptimizerMode,
    pub max_upload_bytes: usize,
    pub score_jitter: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let openai_api_key = optional_env("OPENAI_API_KEY");
        let optimizer_mode = resolve_optimizer_mode(
            optional_env("OPTIMIZER_MODE").as_deref(),
            openai_api_key.is_some(),
        )?;

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_api_key: optional_env("ADZUNA_API_KEY"),
            adzuna_base_url: optional_env("ADZUNA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ADZUNA_BASE_URL.to_string()),
            job_search_timeout_secs: parse_env(
                "JOB_SEARCH_TIMEOUT_SECS",
                DEFAULT_JOB_SEARCH_TIMEOUT_SECS,
            )?,
            openai_api_key,
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            optimizer_mode,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            score_jitter: parse_env("MATCH_SCORE_JITTER", true)?,
        })
    }

    pub fn has_job_search_credentials(&self) -> bool {
        self.adzuna_app_id.is_some() && self.adzuna_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            adzuna_app_id: None,
            adzuna_api_key: None,
            adzuna_base_url: DEFAULT_ADZUNA_BASE_URL.to_string(),
            job_search_timeout_secs: DEFAULT_JOB_SEARCH_TIMEOUT_SECS,
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            optimizer_mode: OptimizerMode::Static,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            score_jitter: true,
        }
    }
}

/// Reads a variable, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

fn resolve_optimizer_mode(requested: Option<&str>, has_llm_key: bool) -> Result<OptimizerMode> {
    match requested.map(str::to_lowercase).as_deref() {
        None if has_llm_key => Ok(OptimizerMode::Llm),
        None | Some("static") => Ok(OptimizerMode::Static),
        Some("llm") if has_llm_key => Ok(OptimizerMode::Llm),
        Some("llm") => {
            warn!("OPTIMIZER_MODE=llm but OPENAI_API_KEY is not set; using static optimizer");
            Ok(OptimizerMode::Static)
        }
        Some(other) => bail!("OPTIMIZER_MODE must be 'static' or 'llm', got '{other}'"),
    }
}
