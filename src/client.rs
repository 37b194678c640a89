//! Generation service boundary.
//!
//! `GenerationClient` is the seam the orchestrator and session work
//! against; `GeminiClient` implements it over the Gemini REST API
//! (image edits via `generateContent`, video via a long-running
//! operation polled to completion).

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{Result, StudioError};
use crate::types::ImageState;

/// External collaborator that turns (image, instruction) into a new
/// image or video. Implemented by [`GeminiClient`] in production and by
/// scripted fakes in tests.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Produce an edited image from a source image and one instruction.
    async fn edit_image(
        &self,
        source: &ImageState,
        instruction: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<ImageState>;

    /// Produce a short video from a source image. Returns the video URI.
    async fn generate_video(&self, source: &ImageState, instruction: &str) -> Result<String>;
}

/// Configuration for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base (e.g. "https://generativelanguage.googleapis.com/v1beta")
    pub endpoint: String,
    pub api_key: String,
    pub image_model: String,
    pub video_model: String,
    /// Per-request timeout (default: 120s)
    pub timeout: Duration,
    /// Interval between video operation polls (default: 5s)
    pub poll_interval: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            image_model: "gemini-2.5-flash-image".to_string(),
            video_model: "veo-3.1-fast-generate-preview".to_string(),
            timeout: Duration::from_secs(120),
            poll_interval: Duration::from_secs(5),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = normalize(endpoint.into());
        self
    }

    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn video_model(mut self, model: impl Into<String>) -> Self {
        self.video_model = model.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

fn normalize(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Async client for the Gemini generation API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(StudioError::MissingApiKey);
        }
        Ok(Self {
            http: Client::new(),
            config: GeminiConfig {
                endpoint: normalize(config.endpoint),
                ..config
            },
        })
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| StudioError::MissingApiKey)?;
        Self::new(GeminiConfig::with_api_key(api_key))
    }

    /// Use a custom `reqwest::Client` (for connection pooling, TLS).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let resp = self
            .http
            .post(url)
            .timeout(self.config.timeout)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| StudioError::Network {
                context: format!("Cannot reach Gemini at {}", self.config.endpoint),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(StudioError::Http {
                status,
                body: body_text,
            });
        }

        resp.json().await.map_err(|e| StudioError::Network {
            context: "Failed to parse Gemini response".into(),
            source: e,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| StudioError::Network {
                context: format!("Cannot reach Gemini at {}", self.config.endpoint),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(StudioError::Http {
                status,
                body: body_text,
            });
        }

        resp.json().await.map_err(|e| StudioError::Network {
            context: "Failed to parse Gemini operation response".into(),
            source: e,
        })
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn edit_image(
        &self,
        source: &ImageState,
        instruction: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<ImageState> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.image_model
        );

        let mut body = json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": source.mime_type, "data": source.data } },
                    { "text": instruction },
                ],
            }],
        });
        if let Some(ratio) = aspect_ratio {
            body["generationConfig"] = json!({ "imageConfig": { "aspectRatio": ratio } });
        }

        let response = self.post_json(&url, &body).await?;
        extract_image(&response)
    }

    async fn generate_video(&self, source: &ImageState, instruction: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:predictLongRunning",
            self.config.endpoint, self.config.video_model
        );

        let body = json!({
            "instances": [{
                "prompt": instruction,
                "image": {
                    "bytesBase64Encoded": source.data,
                    "mimeType": source.mime_type,
                },
            }],
            "parameters": {
                "numberOfVideos": 1,
                "resolution": "720p",
                "aspectRatio": "16:9",
            },
        });

        let response = self.post_json(&url, &body).await?;
        let operation = response
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                StudioError::InvalidResponse("Response missing operation name".into())
            })?
            .to_string();

        // Poll the long-running operation until it reaches a terminal
        // state. No overall deadline here — the caller may impose one.
        loop {
            tokio::time::sleep(self.config.poll_interval).await;

            let op_url = format!("{}/{}", self.config.endpoint, operation);
            let status = self.get_json(&op_url).await?;

            if !status.get("done").and_then(|v| v.as_bool()).unwrap_or(false) {
                continue;
            }
            if let Some(message) = operation_error(&status) {
                return Err(StudioError::VideoFailed(message));
            }
            let uri = extract_video_uri(&status).ok_or(StudioError::NoVideoUri)?;
            // The key is required to fetch the produced content
            return Ok(format!("{}&key={}", uri, self.config.api_key));
        }
    }
}

/// Pull the first inline image out of a `generateContent` response.
///
/// A parts list with only text means the service declined; that text is
/// surfaced verbatim as [`StudioError::Refused`]. Anything else without
/// image data is [`StudioError::NoImageData`].
fn extract_image(response: &Value) -> Result<ImageState> {
    let parts = response
        .pointer("/candidates/0/content/parts")
        .and_then(|v| v.as_array());

    if let Some(parts) = parts {
        for part in parts {
            let inline = part
                .get("inlineData")
                .or_else(|| part.get("inline_data"));
            if let Some(inline) = inline {
                if let Some(data) = inline.get("data").and_then(|v| v.as_str()) {
                    let mime_type = inline
                        .get("mimeType")
                        .or_else(|| inline.get("mime_type"))
                        .and_then(|v| v.as_str())
                        .unwrap_or("image/png");
                    return Ok(ImageState::new(mime_type, data));
                }
            }
        }
        if let Some(text) = parts
            .iter()
            .find_map(|p| p.get("text").and_then(|v| v.as_str()))
        {
            return Err(StudioError::Refused(text.to_string()));
        }
    }

    Err(StudioError::NoImageData)
}

fn operation_error(operation: &Value) -> Option<String> {
    let error = operation.get("error")?;
    Some(
        error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Video generation failed")
            .to_string(),
    )
}

fn extract_video_uri(operation: &Value) -> Option<String> {
    operation
        .pointer("/response/generateVideoResponse/generatedSamples/0/video/uri")
        .or_else(|| operation.pointer("/response/generatedVideos/0/video/uri"))
        .and_then(|v| v.as_str())
        .map(String::from)
}
