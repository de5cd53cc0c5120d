use anyhow::{Context, Result};

use crate::verses::quran_api::{DEFAULT_BASE_URL, DEFAULT_TRANSLATION_IDS};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub quran_api_base_url: String,
    pub quran_api_timeout_secs: u64,
    pub quran_api_max_retries: u32,
    pub quran_api_retry_base_ms: u64,
    /// Translation resource ids in preference order.
    pub translation_ids: Vec<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            quran_api_base_url: env_or("QURAN_API_BASE_URL", DEFAULT_BASE_URL),
            quran_api_timeout_secs: env_or("QURAN_API_TIMEOUT_SECS", "30")
                .parse()
                .context("QURAN_API_TIMEOUT_SECS must be a whole number of seconds")?,
            quran_api_max_retries: env_or("QURAN_API_MAX_RETRIES", "3")
                .parse()
                .context("QURAN_API_MAX_RETRIES must be a non-negative integer")?,
            quran_api_retry_base_ms: env_or("QURAN_API_RETRY_BASE_MS", "1000")
                .parse()
                .context("QURAN_API_RETRY_BASE_MS must be a whole number of milliseconds")?,
            translation_ids: match std::env::var("QURAN_TRANSLATION_IDS") {
                Ok(raw) => parse_translation_ids(&raw)?,
                Err(_) => DEFAULT_TRANSLATION_IDS.to_vec(),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_translation_ids(raw: &str) -> Result<Vec<u32>> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("Invalid translation id '{s}' in QURAN_TRANSLATION_IDS"))
        })
        .collect::<Result<Vec<_>>>()?;
    anyhow::ensure!(!ids.is_empty(), "QURAN_TRANSLATION_IDS must list at least one id");
    Ok(ids)
}
