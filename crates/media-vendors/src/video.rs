//! Text/asset-to-video vendor client.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vendor_core::{async_trait, RenderSpec, RenderedClip, VendorError, VideoModel};

/// Configuration for [`VideoVendor`].
#[derive(Debug, Clone)]
pub struct VideoConfig {
    /// Vendor API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Render model/pipeline name.
    pub model: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.runwayml.com".to_string(),
            api_key: String::new(),
            model: "gen3a_turbo".to_string(),
        }
    }
}

impl VideoConfig {
    /// Create configuration from environment variables.
    ///
    /// Required: `VIDEO_API_KEY`. Optional: `VIDEO_API_URL`, `VIDEO_MODEL`.
    pub fn from_env() -> Result<Self, VendorError> {
        let api_key = env::var("VIDEO_API_KEY")
            .map_err(|_| VendorError::Configuration("VIDEO_API_KEY not set".to_string()))?;

        Ok(Self {
            api_url: env::var("VIDEO_API_URL")
                .unwrap_or_else(|_| "https://api.runwayml.com".to_string()),
            api_key,
            model: env::var("VIDEO_MODEL").unwrap_or_else(|_| "gen3a_turbo".to_string()),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> VideoConfigBuilder {
        VideoConfigBuilder::default()
    }
}

/// Builder for [`VideoConfig`].
#[derive(Debug, Default)]
pub struct VideoConfigBuilder {
    config: VideoConfig,
}

impl VideoConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the render model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> VideoConfig {
        self.config
    }
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    model: &'a str,
    script: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_url: Option<&'a str>,
    image_urls: &'a [String],
    aspect_ratio: &'a str,
}

#[derive(Debug, Deserialize)]
struct RenderResponse {
    status: String,
    video_url: Option<String>,
    thumbnail_url: Option<String>,
    duration_seconds: Option<f64>,
}

/// A [`VideoModel`] backed by a hosted render endpoint.
///
/// A render that is accepted but not finished comes back with no
/// `video_url`; the caller decides how to represent that.
pub struct VideoVendor {
    client: Client,
    config: VideoConfig,
}

impl VideoVendor {
    /// Create a new VideoVendor with the given configuration.
    pub fn new(config: VideoConfig) -> Result<Self, VendorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VendorError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a VideoVendor from environment variables.
    pub fn from_env() -> Result<Self, VendorError> {
        Self::new(VideoConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }
}

#[async_trait]
impl VideoModel for VideoVendor {
    async fn render(&self, spec: &RenderSpec) -> Result<RenderedClip, VendorError> {
        let url = format!("{}/v1/renders", self.config.api_url);

        debug!(
            model = %self.config.model,
            images = spec.image_urls.len(),
            aspect = spec.aspect_ratio.as_str(),
            "Sending render request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&RenderRequest {
                model: &self.config.model,
                script: &spec.script,
                audio_url: spec.audio_url.as_deref(),
                image_urls: &spec.image_urls,
                aspect_ratio: spec.aspect_ratio.as_str(),
            })
            .send()
            .await
            .map_err(|e| VendorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VendorError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: RenderResponse = response
            .json()
            .await
            .map_err(|e| VendorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(render_status = %body.status, has_url = body.video_url.is_some(), "Render response");

        Ok(RenderedClip {
            video_url: body.video_url,
            thumbnail_url: body.thumbnail_url,
            duration_secs: body.duration_seconds,
        })
    }

    fn name(&self) -> &str {
        "VideoVendor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VideoConfig::default();
        assert_eq!(config.model, "gen3a_turbo");
    }

    #[test]
    fn test_pending_render_parses() {
        let raw = r#"{"status": "processing", "video_url": null, "thumbnail_url": null, "duration_seconds": null}"#;
        let body: RenderResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.status, "processing");
        assert!(body.video_url.is_none());
    }

    #[test]
    fn test_finished_render_parses() {
        let raw = r#"{
            "status": "succeeded",
            "video_url": "https://cdn.example.com/out.mp4",
            "thumbnail_url": "https://cdn.example.com/out.jpg",
            "duration_seconds": 27.5
        }"#;
        let body: RenderResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.video_url.as_deref(), Some("https://cdn.example.com/out.mp4"));
        assert_eq!(body.duration_seconds, Some(27.5));
    }
}
