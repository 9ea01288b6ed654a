use async_trait::async_trait;
use log::info;
use serde_json::Value;
use std::time::Duration;

use crate::config::AppConfig;
use crate::providers::{ProviderError, Summarizer};

/// Summarizer backed by the Vertex AI `generateContent` endpoint.
pub struct GeminiSummarizer {
    client: reqwest::Client,
    project: String,
    location: String,
    model: String,
    token: String,
}

impl GeminiSummarizer {
    pub fn from_config(config: &AppConfig, token: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            project: config.gcloud_project.clone(),
            location: config.vertex_location.clone(),
            model: config.summarizer_model.clone(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/publishers/google/models/{model}:generateContent",
            loc = self.location,
            proj = self.project,
            model = self.model,
        )
    }
}

/// Pull the completion text out of a `generateContent` response body.
fn extract_summary(json: &Value) -> Result<String, ProviderError> {
    let summary = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or(ProviderError::EmptyResponse)?
        .trim()
        .to_string();

    if summary.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(summary)
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, ProviderError> {
        let prompt = format!(
            "Summarize the following event description in under 200 characters: {}",
            text
        );

        let body = serde_json::json!({
            "contents": [
                { "role": "user", "parts": [{ "text": prompt }] }
            ]
        });

        info!("Summarizing {} chars with {}", text.len(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        extract_summary(&json)
    }
}
