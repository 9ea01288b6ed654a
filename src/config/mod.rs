use serde::Deserialize;

fn default_port() -> u16 {
    8080
}

fn default_location() -> String {
    "us-central1".to_string()
}

fn default_model() -> String {
    "gemini-1.0-pro".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Backend configuration, read from the process environment.
///
/// `GCLOUD_PROJECT` and `GCS_BUCKET_NAME` are required; the server refuses
/// to start without them. When `GCP_ACCESS_TOKEN` is unset the stub
/// providers are wired instead of the real adapters.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub gcloud_project: String,
    pub gcs_bucket_name: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_location")]
    pub vertex_location: String,
    #[serde(default = "default_model")]
    pub summarizer_model: String,
    #[serde(default = "default_timeout_secs")]
    pub provider_timeout_secs: u64,
    #[serde(default)]
    pub gcp_access_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_poll_secs() -> u64 {
    crate::common::DEFAULT_POLL_INTERVAL_SECS
}

/// Digest client configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DigestConfig {
    #[serde(default = "default_base_url")]
    pub digest_base_url: String,
    #[serde(default = "default_poll_secs")]
    pub digest_poll_secs: u64,
}

impl DigestConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
