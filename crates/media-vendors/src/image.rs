//! Text-to-image vendor client.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vendor_core::{async_trait, GeneratedImage, ImageModel, VendorError};

/// Configuration for [`ImageVendor`].
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Vendor API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Model name to use.
    pub model: String,
    /// Output size, e.g. "1024x1024".
    pub size: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
        }
    }
}

impl ImageConfig {
    /// Create configuration from environment variables.
    ///
    /// Required: `IMAGE_API_KEY`. Optional: `IMAGE_API_URL`, `IMAGE_MODEL`,
    /// `IMAGE_SIZE`.
    pub fn from_env() -> Result<Self, VendorError> {
        let api_key = env::var("IMAGE_API_KEY")
            .map_err(|_| VendorError::Configuration("IMAGE_API_KEY not set".to_string()))?;

        Ok(Self {
            api_url: env::var("IMAGE_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            api_key,
            model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
            size: env::var("IMAGE_SIZE").unwrap_or_else(|_| "1024x1024".to_string()),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> ImageConfigBuilder {
        ImageConfigBuilder::default()
    }
}

/// Builder for [`ImageConfig`].
#[derive(Debug, Default)]
pub struct ImageConfigBuilder {
    config: ImageConfig,
}

impl ImageConfigBuilder {
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

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the output size.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.config.size = size.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ImageConfig {
        self.config
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    data: Vec<GenerationItem>,
}

#[derive(Debug, Deserialize)]
struct GenerationItem {
    url: String,
}

/// An [`ImageModel`] backed by an images/generations endpoint.
pub struct ImageVendor {
    client: Client,
    config: ImageConfig,
}

impl ImageVendor {
    /// Create a new ImageVendor with the given configuration.
    pub fn new(config: ImageConfig) -> Result<Self, VendorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VendorError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create an ImageVendor from environment variables.
    pub fn from_env() -> Result<Self, VendorError> {
        Self::new(ImageConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ImageConfig {
        &self.config
    }
}

#[async_trait]
impl ImageModel for ImageVendor {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, VendorError> {
        let url = format!("{}/v1/images/generations", self.config.api_url);

        debug!(model = %self.config.model, "Sending image generation request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&GenerationRequest {
                model: &self.config.model,
                prompt,
                n: 1,
                size: &self.config.size,
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

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| VendorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let item = body.data.into_iter().next().ok_or_else(|| {
            VendorError::InvalidResponse("image response contained no data".to_string())
        })?;

        Ok(GeneratedImage { url: item.url })
    }

    fn name(&self) -> &str {
        "ImageVendor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImageConfig::default();
        assert_eq!(config.model, "dall-e-3");
        assert_eq!(config.size, "1024x1024");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ImageConfig::builder()
            .api_key("k")
            .api_url("https://img.example.com")
            .model("flux-pro")
            .size("512x512")
            .build();

        assert_eq!(config.api_url, "https://img.example.com");
        assert_eq!(config.model, "flux-pro");
        assert_eq!(config.size, "512x512");
    }

    #[test]
    fn test_response_parses() {
        let raw = r#"{"data": [{"url": "https://cdn.example.com/a.png"}]}"#;
        let body: GenerationResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.data[0].url, "https://cdn.example.com/a.png");
    }
}
