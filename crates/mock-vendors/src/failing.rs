//! Vendor fakes that always fail, for exercising degrade paths.

use vendor_core::{
    async_trait, CompletionRequest, GeneratedImage, ImageModel, LanguageModel, RenderSpec,
    RenderedClip, VendorError, VideoModel,
};

fn provider_error() -> VendorError {
    VendorError::Provider {
        status: 503,
        message: "mock vendor unavailable".to_string(),
    }
}

/// A [`LanguageModel`] that always returns a provider error.
#[derive(Debug, Clone, Default)]
pub struct FailingLanguageModel;

#[async_trait]
impl LanguageModel for FailingLanguageModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, VendorError> {
        Err(provider_error())
    }

    fn name(&self) -> &str {
        "FailingLanguageModel"
    }
}

/// An [`ImageModel`] that always returns a provider error.
#[derive(Debug, Clone, Default)]
pub struct FailingImageModel;

#[async_trait]
impl ImageModel for FailingImageModel {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, VendorError> {
        Err(provider_error())
    }

    fn name(&self) -> &str {
        "FailingImageModel"
    }
}

/// A [`VideoModel`] that always returns a provider error.
#[derive(Debug, Clone, Default)]
pub struct FailingVideoModel;

#[async_trait]
impl VideoModel for FailingVideoModel {
    async fn render(&self, _spec: &RenderSpec) -> Result<RenderedClip, VendorError> {
        Err(provider_error())
    }

    fn name(&self) -> &str {
        "FailingVideoModel"
    }
}
