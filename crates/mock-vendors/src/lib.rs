//! Mock vendor implementations for workflow and handler tests.
//!
//! This crate provides deterministic implementations of the `vendor-core`
//! traits:
//! - [`ScriptedModel`] - returns queued canned replies, records requests
//! - [`StaticImageModel`] / [`StaticSpeechModel`] / [`StaticVideoModel`] /
//!   [`StaticScreenshots`] - fixed URLs with call counters
//! - [`FailingLanguageModel`] / [`FailingImageModel`] / [`FailingVideoModel`] -
//!   always fail with a vendor error
//!
//! For production vendors, use the `llm-vendor` and `media-vendors` crates.
//!
//! # Example
//!
//! ```rust
//! use mock_vendors::ScriptedModel;
//! use vendor_core::{CompletionRequest, LanguageModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vendor_core::VendorError> {
//!     let model = ScriptedModel::with_replies(vec![r#"{"ok": true}"#.to_string()]);
//!     let reply = model.complete(CompletionRequest::new("sys", "user")).await?;
//!     assert_eq!(reply, r#"{"ok": true}"#);
//!     Ok(())
//! }
//! ```

mod failing;
mod media;
mod scripted;

// Re-export vendor-core types for convenience
pub use vendor_core::{
    async_trait, CapturedShot, CompletionRequest, GeneratedImage, ImageModel, LanguageModel,
    RenderSpec, RenderedClip, ScreenshotService, SpeechClip, SpeechModel, VendorError, VideoModel,
};

pub use failing::{FailingImageModel, FailingLanguageModel, FailingVideoModel};
pub use media::{StaticImageModel, StaticScreenshots, StaticSpeechModel, StaticVideoModel};
pub use scripted::ScriptedModel;
