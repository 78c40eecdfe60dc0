//! Static media vendor fakes with deterministic URLs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use vendor_core::{
    async_trait, CapturedShot, GeneratedImage, ImageModel, RenderSpec, RenderedClip,
    ScreenshotService, SpeechClip, SpeechModel, VendorError, VideoModel,
};

/// An [`ImageModel`] that returns numbered URLs under a fixed base.
#[derive(Debug)]
pub struct StaticImageModel {
    base_url: String,
    calls: AtomicUsize,
}

impl Default for StaticImageModel {
    fn default() -> Self {
        Self::new("https://images.test")
    }
}

impl StaticImageModel {
    /// Create a model serving URLs under the given base.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many generations have been made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageModel for StaticImageModel {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, VendorError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GeneratedImage {
            url: format!("{}/{}.png", self.base_url, n),
        })
    }

    fn name(&self) -> &str {
        "StaticImageModel"
    }
}

/// A [`SpeechModel`] that returns a fixed audio URL and records the voices
/// it was asked to use.
#[derive(Debug)]
pub struct StaticSpeechModel {
    audio_url: String,
    voice: String,
    calls: AtomicUsize,
    voices: Mutex<Vec<String>>,
}

impl Default for StaticSpeechModel {
    fn default() -> Self {
        Self {
            audio_url: "https://audio.test/voiceover.mp3".to_string(),
            voice: "mock-voice".to_string(),
            calls: AtomicUsize::new(0),
            voices: Mutex::new(Vec::new()),
        }
    }
}

impl StaticSpeechModel {
    /// Create a model with a custom audio URL and default voice.
    pub fn new(audio_url: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            voice: voice.into(),
            ..Self::default()
        }
    }

    /// How many synthesis calls have been made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The voice ids passed to each synthesis call, in order.
    pub fn requested_voices(&self) -> Vec<String> {
        self.voices.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechModel for StaticSpeechModel {
    async fn synthesize(&self, _text: &str, voice_id: &str) -> Result<SpeechClip, VendorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.voices.lock().unwrap().push(voice_id.to_string());
        Ok(SpeechClip {
            audio_url: self.audio_url.clone(),
            duration_secs: Some(21.0),
        })
    }

    fn default_voice(&self) -> &str {
        &self.voice
    }

    fn name(&self) -> &str {
        "StaticSpeechModel"
    }
}

/// A [`VideoModel`] that returns a fixed clip, or a pending render when
/// built with [`StaticVideoModel::pending`].
#[derive(Debug)]
pub struct StaticVideoModel {
    finished: bool,
    calls: AtomicUsize,
}

impl Default for StaticVideoModel {
    fn default() -> Self {
        Self {
            finished: true,
            calls: AtomicUsize::new(0),
        }
    }
}

impl StaticVideoModel {
    /// A model whose renders finish immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// A model whose renders are accepted but never finish - the returned
    /// clip has no video URL.
    pub fn pending() -> Self {
        Self {
            finished: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many renders have been requested.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoModel for StaticVideoModel {
    async fn render(&self, _spec: &RenderSpec) -> Result<RenderedClip, VendorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.finished {
            return Ok(RenderedClip::default());
        }

        Ok(RenderedClip {
            video_url: Some("https://video.test/out.mp4".to_string()),
            thumbnail_url: Some("https://video.test/out.jpg".to_string()),
            duration_secs: Some(30.0),
        })
    }

    fn name(&self) -> &str {
        "StaticVideoModel"
    }
}

/// A [`ScreenshotService`] that returns two fixed shots for any URL.
#[derive(Debug, Default)]
pub struct StaticScreenshots {
    calls: AtomicUsize,
}

impl StaticScreenshots {
    /// Create the service.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many captures have been made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScreenshotService for StaticScreenshots {
    async fn capture(&self, _url: &str) -> Result<Vec<CapturedShot>, VendorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            CapturedShot {
                url: "https://shots.test/home.png".to_string(),
                file_name: "home.png".to_string(),
            },
            CapturedShot {
                url: "https://shots.test/pricing.png".to_string(),
                file_name: "pricing.png".to_string(),
            },
        ])
    }

    fn name(&self) -> &str {
        "StaticScreenshots"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendor_core::AspectRatio;

    #[tokio::test]
    async fn test_image_urls_are_numbered() {
        let model = StaticImageModel::default();
        let first = model.generate("a portrait").await.unwrap();
        let second = model.generate("another").await.unwrap();

        assert_eq!(first.url, "https://images.test/0.png");
        assert_eq!(second.url, "https://images.test/1.png");
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn test_pending_video_has_no_url() {
        let model = StaticVideoModel::pending();
        let spec = RenderSpec {
            script: "scene".to_string(),
            audio_url: None,
            image_urls: vec![],
            aspect_ratio: AspectRatio::Portrait,
        };

        let clip = model.render(&spec).await.unwrap();
        assert!(clip.video_url.is_none());
    }

    #[tokio::test]
    async fn test_speech_records_requested_voices() {
        let model = StaticSpeechModel::default();
        model.synthesize("hello", "voice-a").await.unwrap();
        model.synthesize("again", "voice-b").await.unwrap();

        assert_eq!(model.call_count(), 2);
        assert_eq!(model.requested_voices(), vec!["voice-a", "voice-b"]);
    }

    #[tokio::test]
    async fn test_screenshots_capture() {
        let service = StaticScreenshots::new();
        let shots = service.capture("https://example.com").await.unwrap();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].file_name, "home.png");
    }
}
