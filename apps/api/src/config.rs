use anyhow::{Context, Result};

/// Default provider endpoint. Overridable via `TOGETHER_BASE_URL` so tests
/// and staging can point the client elsewhere.
pub const DEFAULT_TOGETHER_BASE_URL: &str = "https://api.together.xyz";

/// Application configuration loaded from environment variables.
/// Fails fast at startup if required variables are missing — the API
/// credential is never embedded in source.
#[derive(Debug, Clone)]
pub struct Config {
    pub together_api_key: String,
    pub together_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            together_api_key: require_env("TOGETHER_API_KEY")?,
            together_base_url: std::env::var("TOGETHER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TOGETHER_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
