use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::application::services::{build_audio_prompt, build_text_prompt};
use crate::domain::{AssetState, AudioAsset, Playbook};

pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(60);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);

/// Tuning for the upload-processing poll loop.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

pub struct AnalysisService<M>
where
    M: GenerativeModel,
{
    model: Arc<M>,
    playbook: Playbook,
    poll: PollConfig,
}

impl<M> AnalysisService<M>
where
    M: GenerativeModel,
{
    pub fn new(model: Arc<M>, playbook: Playbook, poll: PollConfig) -> Self {
        Self {
            model,
            playbook,
            poll,
        }
    }

    /// Text flow: embed the transcript into the fixed prompt and request a
    /// completion. Blank-transcript validation happens at the HTTP boundary.
    pub async fn analyze_transcript(&self, transcript: &str) -> Result<String, AnalysisError> {
        let prompt = build_text_prompt(&self.playbook, transcript);

        let feedback = self
            .model
            .complete(&prompt)
            .await
            .map_err(AnalysisError::Completion)?;

        tracing::info!(chars = feedback.len(), "Transcript analysis completed");

        Ok(feedback)
    }

    /// Audio flow: stage the bytes in a scoped temp file, upload, wait for
    /// the provider to finish processing, then request a completion against
    /// the uploaded asset.
    ///
    /// The temp file is removed on every exit path, including errors.
    pub async fn analyze_audio(&self, audio: &[u8]) -> Result<String, AnalysisError> {
        let staged = tempfile::Builder::new()
            .prefix("call-audio-")
            .suffix(".mp3")
            .tempfile()?;
        tokio::fs::write(staged.path(), audio).await?;

        tracing::debug!(bytes = audio.len(), path = %staged.path().display(), "Audio staged for upload");

        let asset = self
            .model
            .upload_audio(staged.path(), "audio/mpeg")
            .await
            .map_err(AnalysisError::Upload)?;

        match self.wait_until_processed(&asset).await? {
            AssetState::Failed => return Err(AnalysisError::AudioProcessingFailed),
            state => {
                tracing::debug!(asset = %asset.name, %state, "Audio asset processed");
            }
        }

        let prompt = build_audio_prompt(&self.playbook);

        let feedback = self
            .model
            .complete_with_audio(&prompt, &asset)
            .await
            .map_err(AnalysisError::Completion)?;

        tracing::info!(
            asset = %asset.name,
            chars = feedback.len(),
            "Audio analysis completed"
        );

        Ok(feedback)
    }

    /// Poll the provider until the asset leaves `Pending`, doubling the
    /// delay between attempts up to `max_backoff`, bounded overall by
    /// `timeout`.
    async fn wait_until_processed(
        &self,
        asset: &AudioAsset,
    ) -> Result<AssetState, AnalysisError> {
        if asset.state.is_terminal() {
            return Ok(asset.state);
        }

        let poll_future = async {
            let mut backoff = self.poll.initial_backoff;

            loop {
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(self.poll.max_backoff);

                let state = self
                    .model
                    .asset_state(asset)
                    .await
                    .map_err(AnalysisError::StateCheck)?;

                if state.is_terminal() {
                    return Ok(state);
                }
            }
        };

        tokio::time::timeout(self.poll.timeout, poll_future)
            .await
            .map_err(|_| AnalysisError::AudioProcessingTimeout(self.poll.timeout))?
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("audio staging failed: {0}")]
    Staging(#[from] std::io::Error),
    #[error("upload: {0}")]
    Upload(GenerativeModelError),
    #[error("state check: {0}")]
    StateCheck(GenerativeModelError),
    #[error("audio processing failed")]
    AudioProcessingFailed,
    #[error("audio processing timed out after {0:?}")]
    AudioProcessingTimeout(Duration),
    #[error("completion: {0}")]
    Completion(GenerativeModelError),
}

impl AnalysisError {
    /// True for the terminal provider-side processing failures that get a
    /// dedicated client-facing message.
    pub fn is_processing_failure(&self) -> bool {
        matches!(
            self,
            AnalysisError::AudioProcessingFailed | AnalysisError::AudioProcessingTimeout(_)
        )
    }
}
