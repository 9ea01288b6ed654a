//! Stand-in providers, wired when no `GCP_ACCESS_TOKEN` is configured.
//!
//! They reproduce the development-stage behavior of the backend: a prefix
//! plus truncation for summaries and a fixed sample clip URL for publishing,
//! logging their inputs like the real adapters do.

use async_trait::async_trait;
use log::info;

use crate::common::PLACEHOLDER_VIDEO_URL;
use crate::providers::{ProviderError, StoragePublisher, Summarizer};

const SUMMARY_PREFIX: &str = "AI Summary: ";

const SUMMARY_TRUNCATE_CHARS: usize = 150;

pub struct StubSummarizer;

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let preview: String = text.chars().take(30).collect();
        info!("Summarizing text: \"{}...\"", preview);

        let truncated: String = text.chars().take(SUMMARY_TRUNCATE_CHARS).collect();
        Ok(format!("{}{}...", SUMMARY_PREFIX, truncated))
    }
}

pub struct StubPublisher;

#[async_trait]
impl StoragePublisher for StubPublisher {
    async fn publish(&self, _bytes: &[u8], destination: &str) -> Result<String, ProviderError> {
        info!("Saving to GCS at: {}", destination);
        Ok(PLACEHOLDER_VIDEO_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_is_prefixed_and_truncated() {
        let long = "x".repeat(400);
        let summary = StubSummarizer.summarize(&long).await.unwrap();
        assert!(summary.starts_with(SUMMARY_PREFIX));
        assert!(summary.ends_with("..."));
        assert_eq!(
            summary.len(),
            SUMMARY_PREFIX.len() + SUMMARY_TRUNCATE_CHARS + 3
        );
    }

    #[tokio::test]
    async fn short_description_survives_intact() {
        let summary = StubSummarizer.summarize("A keynote.").await.unwrap();
        assert_eq!(summary, "AI Summary: A keynote....");
    }

    #[tokio::test]
    async fn publisher_returns_placeholder_url() {
        let url = StubPublisher
            .publish(b"fake-video-data", "videos/main-stage-0.mp4")
            .await
            .unwrap();
        assert_eq!(url, PLACEHOLDER_VIDEO_URL);
    }
}
