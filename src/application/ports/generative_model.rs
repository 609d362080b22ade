use std::path::Path;

use async_trait::async_trait;

use crate::domain::{AssetState, AudioAsset};

/// Outbound port for the generative-AI provider.
///
/// Covers the three provider capabilities the flows need: file upload with
/// asynchronous processing, prompt-only completion, and prompt-plus-file
/// completion.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn upload_audio(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<AudioAsset, GenerativeModelError>;

    async fn asset_state(&self, asset: &AudioAsset) -> Result<AssetState, GenerativeModelError>;

    async fn complete(&self, prompt: &str) -> Result<String, GenerativeModelError>;

    async fn complete_with_audio(
        &self,
        prompt: &str,
        asset: &AudioAsset,
    ) -> Result<String, GenerativeModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
