use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Message shown when the LLM credential is missing at startup.
pub const MISSING_API_KEY_MESSAGE: &str =
    "OpenAI API 키가 설정되지 않았습니다. 환경 변수를 확인하세요.";

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_DOWNLOAD_PATH: &str = "./completed_contracts/completed_contract.docx";

/// Application configuration loaded from environment variables.
/// Startup aborts if the OpenAI credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_timeout_secs: u64,
    /// File served by `GET /download`. Nothing in this service writes it.
    pub download_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_api_key(std::env::var("OPENAI_API_KEY").ok())?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            download_path: std::env::var("DOWNLOAD_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOWNLOAD_PATH)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An unset or blank key is a fatal configuration error.
fn require_api_key(value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => bail!(MISSING_API_KEY_MESSAGE),
    }
}
