//! ChatVendor implementation over the chat-completions protocol.

use reqwest::Client;
use tracing::{debug, warn};
use vendor_core::{async_trait, CompletionRequest, LanguageModel, VendorError};

use crate::api_types::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ResponseFormat,
};
use crate::config::LlmConfig;

/// A [`LanguageModel`] backed by an OpenAI-compatible chat-completion API.
pub struct ChatVendor {
    client: Client,
    config: LlmConfig,
}

impl ChatVendor {
    /// Create a new ChatVendor with the given configuration.
    pub fn new(config: LlmConfig) -> Result<Self, VendorError> {
        let client = Client::builder()
            .build()
            .map_err(|e| VendorError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a ChatVendor from environment variables.
    ///
    /// See [`LlmConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, VendorError> {
        Self::new(LlmConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, VendorError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        debug!(model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| VendorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Prefer the structured message when the body parses.
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_text) {
                return Err(VendorError::Provider {
                    status: status.as_u16(),
                    message: body.error.message,
                });
            }

            return Err(VendorError::Provider {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| VendorError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(completion)
    }
}

#[async_trait]
impl LanguageModel for ChatVendor {
    async fn complete(&self, request: CompletionRequest) -> Result<String, VendorError> {
        let api_request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: request.messages,
            max_tokens: request.max_tokens.or(self.config.max_tokens),
            temperature: request.temperature.or(self.config.temperature),
            response_format: request.json_response.then(ResponseFormat::json_object),
        };

        let completion = self.chat_completion(api_request).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                warn!("No content in completion response");
                VendorError::InvalidResponse("completion had no content".to_string())
            })
    }

    fn name(&self) -> &str {
        "ChatVendor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_name() {
        let vendor = ChatVendor::new(LlmConfig::builder().api_key("test-key").build()).unwrap();
        assert_eq!(vendor.name(), "ChatVendor");
    }

    #[test]
    fn test_config_accessor() {
        let vendor = ChatVendor::new(
            LlmConfig::builder().api_key("k").model("gpt-4o").build(),
        )
        .unwrap();
        assert_eq!(vendor.config().model, "gpt-4o");
    }
}
