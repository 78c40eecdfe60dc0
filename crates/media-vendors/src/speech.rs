//! Text-to-speech vendor client.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vendor_core::{async_trait, SpeechClip, SpeechModel, VendorError};

/// Configuration for [`SpeechVendor`].
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Vendor API base URL.
    pub api_url: String,
    /// API key for authentication.
    pub api_key: String,
    /// Voice used when an influencer has no cloned voice yet.
    pub default_voice: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.elevenlabs.io".to_string(),
            api_key: String::new(),
            default_voice: "narration-default".to_string(),
        }
    }
}

impl SpeechConfig {
    /// Create configuration from environment variables.
    ///
    /// Required: `SPEECH_API_KEY`. Optional: `SPEECH_API_URL`,
    /// `SPEECH_DEFAULT_VOICE`.
    pub fn from_env() -> Result<Self, VendorError> {
        let api_key = env::var("SPEECH_API_KEY")
            .map_err(|_| VendorError::Configuration("SPEECH_API_KEY not set".to_string()))?;

        Ok(Self {
            api_url: env::var("SPEECH_API_URL")
                .unwrap_or_else(|_| "https://api.elevenlabs.io".to_string()),
            api_key,
            default_voice: env::var("SPEECH_DEFAULT_VOICE")
                .unwrap_or_else(|_| "narration-default".to_string()),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> SpeechConfigBuilder {
        SpeechConfigBuilder::default()
    }
}

/// Builder for [`SpeechConfig`].
#[derive(Debug, Default)]
pub struct SpeechConfigBuilder {
    config: SpeechConfig,
}

impl SpeechConfigBuilder {
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

    /// Set the default voice.
    pub fn default_voice(mut self, voice: impl Into<String>) -> Self {
        self.config.default_voice = voice.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SpeechConfig {
        self.config
    }
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    audio_url: String,
    duration_seconds: Option<f64>,
}

/// A [`SpeechModel`] backed by a hosted text-to-speech endpoint.
pub struct SpeechVendor {
    client: Client,
    config: SpeechConfig,
}

impl SpeechVendor {
    /// Create a new SpeechVendor with the given configuration.
    pub fn new(config: SpeechConfig) -> Result<Self, VendorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VendorError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a SpeechVendor from environment variables.
    pub fn from_env() -> Result<Self, VendorError> {
        Self::new(SpeechConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SpeechConfig {
        &self.config
    }
}

#[async_trait]
impl SpeechModel for SpeechVendor {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<SpeechClip, VendorError> {
        let url = format!("{}/v1/text-to-speech/{}", self.config.api_url, voice_id);

        debug!(voice = %voice_id, chars = text.len(), "Sending speech synthesis request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&SynthesisRequest { text })
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

        let body: SynthesisResponse = response
            .json()
            .await
            .map_err(|e| VendorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(SpeechClip {
            audio_url: body.audio_url,
            duration_secs: body.duration_seconds,
        })
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice
    }

    fn name(&self) -> &str {
        "SpeechVendor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpeechConfig::default();
        assert_eq!(config.default_voice, "narration-default");
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = SpeechConfig::builder()
            .api_key("k")
            .default_voice("clone-42")
            .build();
        assert_eq!(config.default_voice, "clone-42");
    }

    #[test]
    fn test_response_parses_without_duration() {
        let raw = r#"{"audio_url": "https://cdn.example.com/v.mp3"}"#;
        let body: SynthesisResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.audio_url, "https://cdn.example.com/v.mp3");
        assert!(body.duration_seconds.is_none());
    }
}
