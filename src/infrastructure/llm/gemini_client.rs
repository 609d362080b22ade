use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{GenerativeModel, GenerativeModelError};
use crate::domain::{AssetState, AudioAsset};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const API_VERSION: &str = "v1beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Adapter for the Google Generative Language REST API: raw file upload,
/// file state lookup, and `generateContent` completions.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model,
        }
    }

    async fn generate(
        &self,
        parts: Vec<serde_json::Value>,
    ) -> Result<String, GenerativeModelError> {
        let url = format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url, API_VERSION, self.model, self.api_key
        );
        let body = serde_json::json!({ "contents": [{ "parts": parts }] });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("request: {}", e)))?;

        let response = check_status(response).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(format!("parse: {}", e)))?;

        extract_text(parsed)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn upload_audio(
        &self,
        path: &Path,
        mime_type: &str,
    ) -> Result<AudioAsset, GenerativeModelError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("read upload: {}", e)))?;

        let url = format!(
            "{}/upload/{}/files?key={}",
            self.base_url, API_VERSION, self.api_key
        );

        tracing::debug!(bytes = data.len(), mime_type = %mime_type, "Uploading audio to Gemini");

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Upload-Protocol", "raw")
            .header("Content-Type", mime_type)
            .body(data)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("upload: {}", e)))?;

        let response = check_status(response).await?;

        let parsed: FileUploadResponse = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(format!("upload parse: {}", e)))?;

        let asset = parsed.file.into_asset()?;

        tracing::info!(asset = %asset.name, state = %asset.state, "Audio uploaded");

        Ok(asset)
    }

    async fn asset_state(&self, asset: &AudioAsset) -> Result<AssetState, GenerativeModelError> {
        let url = format!(
            "{}/{}/{}?key={}",
            self.base_url, API_VERSION, asset.name, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GenerativeModelError::ApiRequestFailed(format!("file get: {}", e)))?;

        let response = check_status(response).await?;

        let parsed: FileMetadata = response
            .json()
            .await
            .map_err(|e| GenerativeModelError::InvalidResponse(format!("file parse: {}", e)))?;

        parsed.parse_state()
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerativeModelError> {
        self.generate(vec![serde_json::json!({ "text": prompt })])
            .await
    }

    async fn complete_with_audio(
        &self,
        prompt: &str,
        asset: &AudioAsset,
    ) -> Result<String, GenerativeModelError> {
        self.generate(vec![
            serde_json::json!({ "text": prompt }),
            serde_json::json!({
                "fileData": {
                    "mimeType": asset.mime_type,
                    "fileUri": asset.uri,
                }
            }),
        ])
        .await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GenerativeModelError> {
    let status = response.status();

    if status.as_u16() == 429 {
        return Err(GenerativeModelError::RateLimited);
    }

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(GenerativeModelError::ApiRequestFailed(format!(
            "status {}: {}",
            status, body
        )));
    }

    Ok(response)
}

#[derive(Debug, Deserialize)]
pub struct FileUploadResponse {
    pub file: FileMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub state: String,
}

impl FileMetadata {
    pub fn parse_state(&self) -> Result<AssetState, GenerativeModelError> {
        AssetState::from_str(&self.state).map_err(GenerativeModelError::InvalidResponse)
    }

    pub fn into_asset(self) -> Result<AudioAsset, GenerativeModelError> {
        let state = self.parse_state()?;
        Ok(AudioAsset::new(
            self.name,
            self.uri,
            self.mime_type.unwrap_or_else(|| "audio/mpeg".to_string()),
            state,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Concatenate the text parts of the first candidate.
pub fn extract_text(response: GenerateContentResponse) -> Result<String, GenerativeModelError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(GenerativeModelError::InvalidResponse(
            "completion contained no text".to_string(),
        ));
    }

    Ok(text)
}
