//! Vendor trait definitions.
//!
//! Each external AI collaborator gets one small trait so workflows can be
//! exercised against mocks without network access. All implementations must
//! be `Send + Sync` because handles are shared across request handlers.

use async_trait::async_trait;

use crate::error::VendorError;
use crate::types::{
    CapturedShot, CompletionRequest, GeneratedImage, RenderSpec, RenderedClip, SpeechClip,
};

/// A chat-completion language model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run a completion and return the assistant's text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, VendorError>;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}

/// A text-to-image model.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate a single image from a prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, VendorError>;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}

/// A text-to-speech model.
#[async_trait]
pub trait SpeechModel: Send + Sync {
    /// Synthesize speech for the given text with the given voice.
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<SpeechClip, VendorError>;

    /// The voice used when nothing else was chosen.
    fn default_voice(&self) -> &str;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}

/// A video rendering service.
#[async_trait]
pub trait VideoModel: Send + Sync {
    /// Submit a render. The returned clip may have no `video_url` yet when
    /// the vendor accepted the job but has not finished it.
    async fn render(&self, spec: &RenderSpec) -> Result<RenderedClip, VendorError>;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}

/// A website screenshot capture service.
#[async_trait]
pub trait ScreenshotService: Send + Sync {
    /// Capture one or more screenshots of the given URL.
    async fn capture(&self, url: &str) -> Result<Vec<CapturedShot>, VendorError>;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}
