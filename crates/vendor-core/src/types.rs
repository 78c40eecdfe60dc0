//! Shared request and result types for vendor calls.

use serde::{Deserialize, Serialize};

/// A chat message sent to a language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A completion request handed to a [`crate::LanguageModel`].
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Messages in the conversation, system prompt first.
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for generation.
    pub temperature: Option<f32>,
    /// Ask the model for a JSON object response.
    pub json_response: bool,
}

impl CompletionRequest {
    /// Build a request from a system prompt and a user prompt.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: None,
            temperature: None,
            json_response: false,
        }
    }

    /// Request a JSON object response.
    pub fn json(mut self) -> Self {
        self.json_response = true;
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// The last user message, if any. Useful for logging and assertions.
    pub fn user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// A screenshot captured from a website.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedShot {
    /// Hosted URL of the screenshot.
    pub url: String,
    /// File name assigned by the capture service.
    pub file_name: String,
}

/// A generated image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Hosted URL of the image.
    pub url: String,
}

/// A synthesized voice clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechClip {
    /// Hosted URL of the audio.
    pub audio_url: String,
    /// Clip duration in seconds, if the vendor reports it.
    pub duration_secs: Option<f64>,
}

/// Output aspect ratio for rendered video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 9:16, for vertical short-form feeds.
    Portrait,
    /// 1:1.
    Square,
    /// 16:9.
    Landscape,
}

impl AspectRatio {
    /// Wire representation expected by render vendors.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
        }
    }
}

/// Everything a video vendor needs to render a clip.
#[derive(Debug, Clone)]
pub struct RenderSpec {
    /// Scene-by-scene script text.
    pub script: String,
    /// Voiceover audio URL, if one was synthesized.
    pub audio_url: Option<String>,
    /// Source images (screenshots, avatar) for the render.
    pub image_urls: Vec<String>,
    /// Output aspect ratio.
    pub aspect_ratio: AspectRatio,
}

/// A rendered clip. Fields are optional because an accepted but
/// unfinished render legitimately has no URLs yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedClip {
    /// Hosted video URL, when the render completed.
    pub video_url: Option<String>,
    /// Thumbnail URL, when available.
    pub thumbnail_url: Option<String>,
    /// Duration in seconds, when reported.
    pub duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors() {
        assert_eq!(ChatMessage::system("s").role, "system");
        assert_eq!(ChatMessage::user("u").role, "user");
        assert_eq!(ChatMessage::assistant("a").role, "assistant");
    }

    #[test]
    fn test_completion_request_builder() {
        let request = CompletionRequest::new("be terse", "hello")
            .json()
            .with_temperature(0.4)
            .with_max_tokens(256);

        assert_eq!(request.messages.len(), 2);
        assert!(request.json_response);
        assert_eq!(request.temperature, Some(0.4));
        assert_eq!(request.max_tokens, Some(256));
        assert_eq!(request.user_text(), Some("hello"));
    }

    #[test]
    fn test_aspect_ratio_wire_format() {
        assert_eq!(AspectRatio::Portrait.as_str(), "9:16");
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
        assert_eq!(AspectRatio::Landscape.as_str(), "16:9");
    }
}
