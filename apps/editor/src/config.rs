use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RELOAD_DELAY_MS: u64 = 1000;

/// Editor configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Base URL of the profile API, without the `/api/profile` path.
    pub api_url: String,
    pub request_timeout: Duration,
    /// Pause between a successful save and the page reload.
    pub reload_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            reload_delay: Duration::from_millis(DEFAULT_RELOAD_DELAY_MS),
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(EditorConfig {
            api_url: lookup("PROFILE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "PROFILE_API_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            reload_delay: Duration::from_millis(parse_or(
                &lookup,
                "PROFILE_RELOAD_DELAY_MS",
                DEFAULT_RELOAD_DELAY_MS,
            )?),
        })
    }
}

fn parse_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<u64> {
    match lookup(key) {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a non-negative integer")),
        None => Ok(default),
    }
}
