//! Upstream provider adapters.
//!
//! Each adapter is a single-call pass-through: validated input in, provider
//! result or error out. No retry and no circuit breaking; errors propagate
//! upward unchanged and the API layer collapses them into one generic 500.

pub mod gcs;
pub mod gemini;
pub mod imagen;
pub mod stub;

pub use gcs::GcsPublisher;
pub use gemini::GeminiSummarizer;
pub use imagen::ImagenSynthesizer;
pub use stub::{StubPublisher, StubSummarizer};

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("failed to parse upstream response: {0}")]
    Parse(String),

    #[error("upstream returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if let Some(status) = e.status() {
            ProviderError::Status(status.as_u16())
        } else {
            ProviderError::Request(e.to_string())
        }
    }
}

/// Text in, text out: summarize an event description.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, ProviderError>;
}

/// Text in, binary out: synthesize a clip from a prompt.
#[async_trait]
pub trait VideoSynthesizer: Send + Sync {
    async fn synthesize(&self, prompt: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Binary in, URL out: persist a blob and return a publicly fetchable
/// address after an explicit make-public step.
#[async_trait]
pub trait StoragePublisher: Send + Sync {
    async fn publish(&self, bytes: &[u8], destination: &str) -> Result<String, ProviderError>;
}
