//! Language-model side of the pipeline.
//!
//! Both call sites treat the model as advisory: failures are logged and turned
//! into "nothing to do" rather than surfaced to the caller.

mod enrichment;
mod extractor;
mod ollama;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use enrichment::{parse_enrichment, Enricher};
pub use extractor::TitleExtractor;
pub use ollama::OllamaClient;

/// Language-model client errors.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A text-completion backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send a prompt and return the trimmed completion text.
    async fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, LlmError>;
}
