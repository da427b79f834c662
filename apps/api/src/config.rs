use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_api_key()?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// The Gemini credential. `GEMINI_API_KEY` preferred; `GOOGLE_API_KEY` is
/// accepted as the legacy name.
fn require_api_key() -> Result<String> {
    std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .context("Required environment variable 'GEMINI_API_KEY' (or 'GOOGLE_API_KEY') is not set")
}
