//! The vendor bundle every workflow runs against.

use std::sync::Arc;

use llm_vendor::ChatVendor;
use media_vendors::image::ImageVendor;
use media_vendors::screenshot::ScreenshotVendor;
use media_vendors::speech::SpeechVendor;
use media_vendors::video::VideoVendor;
use vendor_core::{
    ImageModel, LanguageModel, ScreenshotService, SpeechModel, VendorError, VideoModel,
};

/// The set of AI vendors the workflows call.
///
/// Held behind trait objects so tests can swap in scripted fakes without
/// touching any workflow code.
#[derive(Clone)]
pub struct Studio {
    language: Arc<dyn LanguageModel>,
    image: Arc<dyn ImageModel>,
    speech: Arc<dyn SpeechModel>,
    video: Arc<dyn VideoModel>,
    screenshots: Arc<dyn ScreenshotService>,
}

impl Studio {
    /// Assemble a studio from explicit vendors.
    pub fn new(
        language: Arc<dyn LanguageModel>,
        image: Arc<dyn ImageModel>,
        speech: Arc<dyn SpeechModel>,
        video: Arc<dyn VideoModel>,
        screenshots: Arc<dyn ScreenshotService>,
    ) -> Self {
        Self {
            language,
            image,
            speech,
            video,
            screenshots,
        }
    }

    /// Assemble a studio of real HTTP vendors from environment variables.
    pub fn from_env() -> Result<Self, VendorError> {
        Ok(Self::new(
            Arc::new(ChatVendor::from_env()?),
            Arc::new(ImageVendor::from_env()?),
            Arc::new(SpeechVendor::from_env()?),
            Arc::new(VideoVendor::from_env()?),
            Arc::new(ScreenshotVendor::from_env()?),
        ))
    }

    pub fn language(&self) -> &dyn LanguageModel {
        self.language.as_ref()
    }

    pub fn image(&self) -> &dyn ImageModel {
        self.image.as_ref()
    }

    pub fn speech(&self) -> &dyn SpeechModel {
        self.speech.as_ref()
    }

    pub fn video(&self) -> &dyn VideoModel {
        self.video.as_ref()
    }

    pub fn screenshots(&self) -> &dyn ScreenshotService {
        self.screenshots.as_ref()
    }

    /// Voice used when an influencer has no cloned voice of its own.
    pub fn default_voice(&self) -> &str {
        self.speech.default_voice()
    }
}
