//! Stage enrichment: one summarize → synthesize → publish pipeline per
//! stage, fanned out concurrently across stages.

use anyhow::Result;
use chrono::Utc;
use futures::future::try_join_all;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::stage::{EnrichedStage, StageDescriptor};
use crate::providers::{
    GcsPublisher, GeminiSummarizer, ImagenSynthesizer, StoragePublisher, StubPublisher,
    StubSummarizer, Summarizer, VideoSynthesizer,
};

pub struct Enricher {
    summarizer: Arc<dyn Summarizer>,
    synthesizer: Arc<dyn VideoSynthesizer>,
    publisher: Arc<dyn StoragePublisher>,
}

impl Enricher {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        synthesizer: Arc<dyn VideoSynthesizer>,
        publisher: Arc<dyn StoragePublisher>,
    ) -> Self {
        Self {
            summarizer,
            synthesizer,
            publisher,
        }
    }

    /// Wire providers from config: real adapters when an access token is
    /// present, the development stand-ins otherwise. The video model is
    /// unavailable upstream, so the synthesizer is a stub either way.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.gcp_access_token.as_deref() {
            Some(token) if !token.is_empty() => Self::new(
                Arc::new(GeminiSummarizer::from_config(config, token)),
                Arc::new(ImagenSynthesizer),
                Arc::new(GcsPublisher::from_config(config, token)),
            ),
            _ => {
                log::warn!("GCP_ACCESS_TOKEN not set; using stub providers");
                Self::new(
                    Arc::new(StubSummarizer),
                    Arc::new(ImagenSynthesizer),
                    Arc::new(StubPublisher),
                )
            }
        }
    }

    /// Enrich every stage, preserving input order.
    ///
    /// Stages run concurrently; within one stage the three provider calls
    /// are strictly sequential. All-or-nothing: a failure in any single
    /// stage's pipeline fails the whole batch and no partial results are
    /// returned.
    pub async fn enrich_all(&self, stages: &[StageDescriptor]) -> Result<Vec<EnrichedStage>> {
        try_join_all(stages.iter().map(|stage| self.enrich_stage(stage))).await
    }

    async fn enrich_stage(&self, stage: &StageDescriptor) -> Result<EnrichedStage> {
        let summary = self.summarizer.summarize(&stage.description).await?;

        let video = self.synthesizer.synthesize(&summary).await?;

        let destination = format!("videos/{}-{}.mp4", stage.id, Utc::now().timestamp_millis());
        let video_url = self.publisher.publish(&video, &destination).await?;

        Ok(EnrichedStage {
            name: stage.name.clone(),
            summary,
            video_url,
        })
    }
}
