//! HTTP clients for the media-side AI vendors.
//!
//! One module per collaborator:
//!
//! - [`image`] - text-to-image generation (avatars, marketing images)
//! - [`speech`] - text-to-speech synthesis for voiceovers
//! - [`video`] - text/asset-to-video rendering
//! - [`screenshot`] - website screenshot capture
//!
//! Each module follows the same shape: an env-var `Config` with a builder,
//! a reqwest client struct implementing the matching `vendor-core` trait,
//! and wire types for that vendor's endpoint.

pub mod image;
pub mod screenshot;
pub mod speech;
pub mod video;

pub use image::{ImageConfig, ImageVendor};
pub use screenshot::{ScreenshotConfig, ScreenshotVendor};
pub use speech::{SpeechConfig, SpeechVendor};
pub use video::{VideoConfig, VideoVendor};
