use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

const DEFAULT_APP_URL: &str = "http://localhost:3000";
const DEFAULT_APP_NAME: &str = "Vibe Chatbot";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Process-wide settings, read once at startup and shared read-only with every worker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback credential used when the request body carries none.
    pub openrouter_api_key: Option<String>,
    /// Sent upstream as `HTTP-Referer`.
    pub app_url: String,
    /// Sent upstream as `X-Title`.
    pub app_name: String,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|v| !v.is_empty()),
            app_url: lookup("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            upstream_url: OPENROUTER_CHAT_URL.to_string(),
            upstream_timeout: UPSTREAM_TIMEOUT,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
