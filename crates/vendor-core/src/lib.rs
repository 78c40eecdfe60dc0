//! Core traits and types for AI vendor integrations.
//!
//! This crate provides the shared interface for every external AI service
//! the marketing factory talks to. It defines:
//!
//! - [`LanguageModel`] - chat-completion text generation
//! - [`ImageModel`] - text-to-image generation
//! - [`SpeechModel`] - text-to-speech synthesis
//! - [`VideoModel`] - text/asset-to-video rendering
//! - [`ScreenshotService`] - website screenshot capture
//! - [`VendorError`] - the shared error type for vendor operations
//!
//! Production implementations live in the `llm-vendor` and `media-vendors`
//! crates; deterministic fakes live in `mock-vendors`.
//!
//! # Example
//!
//! ```rust
//! use vendor_core::{async_trait, CompletionRequest, LanguageModel, VendorError};
//!
//! struct CannedModel;
//!
//! #[async_trait]
//! impl LanguageModel for CannedModel {
//!     async fn complete(&self, _request: CompletionRequest) -> Result<String, VendorError> {
//!         Ok("hello".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedModel"
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::VendorError;
pub use traits::{ImageModel, LanguageModel, ScreenshotService, SpeechModel, VideoModel};
pub use types::{
    AspectRatio, CapturedShot, ChatMessage, CompletionRequest, GeneratedImage, RenderSpec,
    RenderedClip, SpeechClip,
};

// Re-export async_trait for implementors
pub use async_trait::async_trait;
