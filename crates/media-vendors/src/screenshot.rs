//! Website screenshot capture client.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vendor_core::{async_trait, CapturedShot, ScreenshotService, VendorError};

/// Configuration for [`ScreenshotVendor`].
#[derive(Debug, Clone)]
pub struct ScreenshotConfig {
    /// Capture service base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Capture the full page height, not just the viewport.
    pub full_page: bool,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.screenshotone.com".to_string(),
            api_key: String::new(),
            full_page: true,
        }
    }
}

impl ScreenshotConfig {
    /// Create configuration from environment variables.
    ///
    /// Required: `SCREENSHOT_API_KEY`. Optional: `SCREENSHOT_API_URL`,
    /// `SCREENSHOT_FULL_PAGE`.
    pub fn from_env() -> Result<Self, VendorError> {
        let api_key = env::var("SCREENSHOT_API_KEY")
            .map_err(|_| VendorError::Configuration("SCREENSHOT_API_KEY not set".to_string()))?;

        let full_page = env::var("SCREENSHOT_FULL_PAGE")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(true);

        Ok(Self {
            api_url: env::var("SCREENSHOT_API_URL")
                .unwrap_or_else(|_| "https://api.screenshotone.com".to_string()),
            api_key,
            full_page,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> ScreenshotConfigBuilder {
        ScreenshotConfigBuilder::default()
    }
}

/// Builder for [`ScreenshotConfig`].
#[derive(Debug, Default)]
pub struct ScreenshotConfigBuilder {
    config: ScreenshotConfig,
}

impl ScreenshotConfigBuilder {
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

    /// Set full-page capture.
    pub fn full_page(mut self, full_page: bool) -> Self {
        self.config.full_page = full_page;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ScreenshotConfig {
        self.config
    }
}

#[derive(Debug, Serialize)]
struct CaptureRequest<'a> {
    url: &'a str,
    full_page: bool,
}

#[derive(Debug, Deserialize)]
struct CaptureResponse {
    screenshots: Vec<CaptureItem>,
}

#[derive(Debug, Deserialize)]
struct CaptureItem {
    url: String,
    file_name: String,
}

/// A [`ScreenshotService`] backed by a hosted capture endpoint.
pub struct ScreenshotVendor {
    client: Client,
    config: ScreenshotConfig,
}

impl ScreenshotVendor {
    /// Create a new ScreenshotVendor with the given configuration.
    pub fn new(config: ScreenshotConfig) -> Result<Self, VendorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VendorError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a ScreenshotVendor from environment variables.
    pub fn from_env() -> Result<Self, VendorError> {
        Self::new(ScreenshotConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScreenshotConfig {
        &self.config
    }
}

#[async_trait]
impl ScreenshotService for ScreenshotVendor {
    async fn capture(&self, url: &str) -> Result<Vec<CapturedShot>, VendorError> {
        let endpoint = format!("{}/v1/capture", self.config.api_url);

        debug!(target = %url, full_page = self.config.full_page, "Sending capture request");

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&CaptureRequest {
                url,
                full_page: self.config.full_page,
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

        let body: CaptureResponse = response
            .json()
            .await
            .map_err(|e| VendorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        if body.screenshots.is_empty() {
            return Err(VendorError::InvalidResponse(
                "capture response contained no screenshots".to_string(),
            ));
        }

        Ok(body
            .screenshots
            .into_iter()
            .map(|item| CapturedShot {
                url: item.url,
                file_name: item.file_name,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "ScreenshotVendor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreenshotConfig::default();
        assert!(config.full_page);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = ScreenshotConfig::builder()
            .api_key("k")
            .full_page(false)
            .build();
        assert!(!config.full_page);
    }

    #[test]
    fn test_capture_response_parses() {
        let raw = r#"{"screenshots": [
            {"url": "https://cdn.example.com/home.png", "file_name": "home.png"},
            {"url": "https://cdn.example.com/pricing.png", "file_name": "pricing.png"}
        ]}"#;
        let body: CaptureResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.screenshots.len(), 2);
        assert_eq!(body.screenshots[1].file_name, "pricing.png");
    }
}
