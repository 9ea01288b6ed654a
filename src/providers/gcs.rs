use async_trait::async_trait;
use log::info;
use std::time::Duration;

use crate::config::AppConfig;
use crate::providers::{ProviderError, StoragePublisher};

/// Publisher backed by the Cloud Storage JSON API: media upload followed by
/// an explicit make-public step (`allUsers` reader ACL).
pub struct GcsPublisher {
    client: reqwest::Client,
    bucket: String,
    token: String,
}

impl GcsPublisher {
    pub fn from_config(config: &AppConfig, token: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            bucket: config.gcs_bucket_name.clone(),
            token: token.to_string(),
        }
    }
}

/// Object names appear in the ACL resource path, where `/` must be escaped.
fn encode_object_name(destination: &str) -> String {
    destination.replace('/', "%2F")
}

#[async_trait]
impl StoragePublisher for GcsPublisher {
    async fn publish(&self, bytes: &[u8], destination: &str) -> Result<String, ProviderError> {
        info!("Uploading {} bytes to gs://{}/{}", bytes.len(), self.bucket, destination);

        let upload_url = format!(
            "https://storage.googleapis.com/upload/storage/v1/b/{}/o",
            self.bucket
        );
        self.client
            .post(&upload_url)
            .query(&[("uploadType", "media"), ("name", destination)])
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "video/mp4")
            .body(bytes.to_vec())
            .send()
            .await?
            .error_for_status()?;

        let acl_url = format!(
            "https://storage.googleapis.com/storage/v1/b/{}/o/{}/acl",
            self.bucket,
            encode_object_name(destination)
        );
        self.client
            .post(&acl_url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "entity": "allUsers", "role": "READER" }))
            .send()
            .await?
            .error_for_status()?;

        Ok(format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket, destination
        ))
    }
}
