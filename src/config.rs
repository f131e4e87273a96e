//! Service configuration loaded from environment variables.
//!
//! Language model:
//! - `OLLAMA_URL` - Base URL (default: `http://localhost:11434`)
//! - `OLLAMA_MODEL` - Model name (default: `llama3`)
//! - `OLLAMA_TIMEOUT_SECS` - Per-call timeout (default: 15)
//!
//! Tracker:
//! - `TAIGA_URL` - API base URL, e.g. `https://api.taiga.io/api/v1` (required)
//! - `TAIGA_USERNAME`, `TAIGA_PASSWORD` - Credentials (required)
//! - `TAIGA_PROJECT_SLUG` - Project slug (required)
//! - `TAIGA_TIMEOUT_SECS` - Client timeout (optional, transport default when unset)
//! - `TAIGA_DEFAULT_PRIORITY` - Priority for new stories (default: 3)

use std::time::Duration;

use thiserror::Error;

use crate::models::DEFAULT_PRIORITY;

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "llama3";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 15;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the Ollama generate endpoint.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            model: env_or("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
            timeout: Duration::from_secs(
                parse_env("OLLAMA_TIMEOUT_SECS")?.unwrap_or(DEFAULT_LLM_TIMEOUT_SECS),
            ),
        })
    }

    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

/// Credentials and project for the Taiga API.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub project_slug: String,
    pub timeout: Option<Duration>,
    pub default_priority: i64,
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(
            require("TAIGA_URL")?,
            require("TAIGA_USERNAME")?,
            require("TAIGA_PASSWORD")?,
            require("TAIGA_PROJECT_SLUG")?,
        );
        config.timeout = parse_env("TAIGA_TIMEOUT_SECS")?.map(Duration::from_secs);
        if let Some(priority) = parse_env("TAIGA_DEFAULT_PRIORITY")? {
            config.default_priority = priority;
        }
        Ok(config)
    }

    /// Create with explicit configuration.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        project_slug: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            project_slug: project_slug.into(),
            timeout: None,
            default_priority: DEFAULT_PRIORITY,
        }
    }

    /// Build the HTTP client tracker sessions share.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// Everything the service needs to run.
#[derive(Clone, Debug)]
pub struct Settings {
    pub llm: LlmConfig,
    pub tracker: TrackerConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            llm: LlmConfig::from_env()?,
            tracker: TrackerConfig::from_env()?,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_env<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(None),
    }
}
