//! HTTP client for the Ollama generate API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{LanguageModel, LlmError};
use crate::config::LlmConfig;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Non-streaming client for `POST {base}/api/generate`.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Reuse an existing connection pool.
    pub fn with_client(config: &LlmConfig, client: Client) -> Self {
        Self {
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            client,
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(timeout)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.response.trim().to_string();
        tracing::info!(model = %self.model, "Ollama response: {}", text);
        Ok(text)
    }
}
