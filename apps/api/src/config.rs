use anyhow::{Context, Result};

pub const DEFAULT_OWNER_NAME: &str = "Alex Morgan";
pub const DEFAULT_OWNER_EMAIL: &str = "alex.morgan@example.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; a missing API key is reported per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub owner_name: String,
    pub owner_email: String,
    pub resume_path: String,
    pub summary_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    /// The `NEXT_PUBLIC_*` names are accepted so a `.env` shared with the web frontend works as-is.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            owner_name: get("OWNER_NAME")
                .or_else(|| get("NEXT_PUBLIC_OWNER_NAME"))
                .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            owner_email: get("OWNER_EMAIL")
                .or_else(|| get("NEXT_PUBLIC_OWNER_EMAIL"))
                .unwrap_or_else(|| DEFAULT_OWNER_EMAIL.to_string()),
            resume_path: get("RESUME_PATH").unwrap_or_else(|| "resume.pdf".to_string()),
            summary_path: get("SUMMARY_PATH").unwrap_or_else(|| "summary.txt".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
