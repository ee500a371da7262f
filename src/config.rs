use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            gemini_api_key: var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            gemini_base_url: var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(
                var("GENERATION_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".into())
                    .parse()
                    .context("GENERATION_TIMEOUT_SECS must be a number")?,
            ),
            bind_addr: var("NATURI_BIND")
                .unwrap_or_else(|| "127.0.0.1:8080".into())
                .parse()
                .context("NATURI_BIND must be host:port")?,
            log_dir: var("NATURI_LOG_DIR").unwrap_or_else(|| "logs".into()),
        })
    }
}
