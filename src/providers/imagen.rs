use async_trait::async_trait;
use log::info;

use crate::common::PLACEHOLDER_VIDEO_BYTES;
use crate::providers::{ProviderError, VideoSynthesizer};

/// Video synthesizer for the Imagen video model.
///
/// The upstream model is not yet available, so this adapter returns fixed
/// placeholder bytes. It keeps the synthesize step in the pipeline so the
/// real call can slot in without touching orchestration.
pub struct ImagenSynthesizer;

#[async_trait]
impl VideoSynthesizer for ImagenSynthesizer {
    async fn synthesize(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        let preview: String = prompt.chars().take(50).collect();
        info!("Generating video for prompt: \"{}...\"", preview);
        Ok(PLACEHOLDER_VIDEO_BYTES.to_vec())
    }
}
