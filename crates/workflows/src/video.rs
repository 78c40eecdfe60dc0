//! Video generation stages: scripting, voiceover, rendering.
//!
//! The stages are exposed separately rather than as one call because the
//! HTTP handler persists a status transition between each of them. A stage
//! failure therefore leaves the video row in the state it had reached, and
//! the handler decides how to record the failure.

use database::models::{Platform, Project, Storyboard};
use serde::{Deserialize, Serialize};
use tracing::info;
use vendor_core::{AspectRatio, CompletionRequest, RenderSpec, RenderedClip, SpeechClip};

use crate::error::WorkflowError;
use crate::parse::parse_llm_json;
use crate::prompts;
use crate::studio::Studio;

/// Output of the scripting stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScriptDraft {
    pub title: String,
    pub hook: String,
    pub cta: String,
    pub hashtags: Vec<String>,
    pub script: String,
    pub storyboard: Option<Storyboard>,
}

/// What the scripting stage needs to know.
#[derive(Debug, Clone)]
pub struct ScriptBrief<'a> {
    pub project: &'a Project,
    pub platform: Platform,
    pub persona_name: Option<&'a str>,
}

/// Aspect ratio for a target platform. Instagram and TikTok are vertical
/// feeds; LinkedIn plays inline in a landscape timeline.
pub fn aspect_for(platform: Platform) -> AspectRatio {
    match platform {
        Platform::Instagram | Platform::Tiktok => AspectRatio::Portrait,
        Platform::Linkedin => AspectRatio::Landscape,
    }
}

/// Write the script for a video.
pub async fn write_script(
    studio: &Studio,
    brief: &ScriptBrief<'_>,
) -> Result<ScriptDraft, WorkflowError> {
    info!(
        project_id = %brief.project.id,
        platform = %brief.platform,
        "Writing video script"
    );

    let reply = studio
        .language()
        .complete(
            CompletionRequest::new(
                prompts::SCRIPT_SYSTEM,
                &prompts::script_prompt(brief.project, brief.platform.as_str(), brief.persona_name),
            )
            .json(),
        )
        .await?;

    let draft: ScriptDraft = parse_llm_json(&reply)?;
    if draft.script.is_empty() {
        return Err(WorkflowError::InvalidResponse(
            "scripting stage returned an empty script".to_string(),
        ));
    }

    Ok(draft)
}

/// Synthesize the voiceover for a script.
pub async fn voice_over(
    studio: &Studio,
    text: &str,
    voice_id: Option<&str>,
) -> Result<SpeechClip, WorkflowError> {
    let voice = voice_id.unwrap_or_else(|| studio.default_voice());
    let clip = studio.speech().synthesize(text, voice).await?;
    Ok(clip)
}

/// Render the final clip.
///
/// A vendor that queues the render returns no `video_url`; the caller
/// leaves the row in `rendering` rather than marking it ready.
pub async fn render_clip(studio: &Studio, spec: &RenderSpec) -> Result<RenderedClip, WorkflowError> {
    let clip = studio.video().render(spec).await?;
    info!(
        finished = clip.video_url.is_some(),
        duration_secs = clip.duration_secs,
        "Render call returned"
    );
    Ok(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_vendors::{
        ScriptedModel, StaticImageModel, StaticScreenshots, StaticSpeechModel, StaticVideoModel,
    };
    use std::sync::Arc;

    const SCRIPT_JSON: &str = r##"{
        "title": "Morning widgets",
        "hook": "Your widgets, before your coffee",
        "cta": "Order by midnight",
        "hashtags": ["#widgets", "#overnight"],
        "script": "Ever waited a week for a widget? We don't do that here.",
        "storyboard": {
            "hookVariations": ["Widgets by sunrise"],
            "scenes": [
                {"description": "Warehouse at dawn", "voiceover": "It starts at 4am.", "durationSecs": 4.0}
            ],
            "problemSolution": {"problem": "Slow shipping", "solution": "Overnight delivery"}
        }
    }"##;

    fn studio(language: ScriptedModel) -> Studio {
        Studio::new(
            Arc::new(language),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        )
    }

    fn sample_project() -> Project {
        serde_json::from_value(serde_json::json!({
            "id": "proj-1",
            "userId": "user-1",
            "sourceUrl": "https://example.com",
            "name": "Example Co",
            "description": "Ships widgets",
            "valueProposition": "Widgets by morning",
            "targetAudience": {},
            "competitors": [],
            "marketingConstitution": {},
            "analysisStatus": "completed",
            "createdAt": "",
            "updatedAt": ""
        }))
        .unwrap()
    }

    #[test]
    fn test_aspect_per_platform() {
        assert_eq!(aspect_for(Platform::Instagram), AspectRatio::Portrait);
        assert_eq!(aspect_for(Platform::Tiktok), AspectRatio::Portrait);
        assert_eq!(aspect_for(Platform::Linkedin), AspectRatio::Landscape);
    }

    #[tokio::test]
    async fn test_write_script_parses_storyboard() {
        let project = sample_project();
        let studio = studio(ScriptedModel::with_replies([SCRIPT_JSON]));
        let brief = ScriptBrief {
            project: &project,
            platform: Platform::Tiktok,
            persona_name: Some("Maya Chen"),
        };

        let draft = write_script(&studio, &brief).await.unwrap();

        assert_eq!(draft.title, "Morning widgets");
        assert_eq!(draft.hashtags.len(), 2);
        let storyboard = draft.storyboard.unwrap();
        assert_eq!(storyboard.scenes.len(), 1);
        assert_eq!(storyboard.scenes[0].duration_secs, 4.0);
    }

    #[tokio::test]
    async fn test_write_script_rejects_empty_script() {
        let project = sample_project();
        let studio = studio(ScriptedModel::with_replies([r#"{"title": "x"}"#]));
        let brief = ScriptBrief {
            project: &project,
            platform: Platform::Instagram,
            persona_name: None,
        };

        let result = write_script(&studio, &brief).await;
        assert!(matches!(result, Err(WorkflowError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_voice_over_falls_back_to_default_voice() {
        let speech = Arc::new(StaticSpeechModel::default());
        let studio = Studio::new(
            Arc::new(ScriptedModel::new()),
            Arc::new(StaticImageModel::default()),
            speech.clone(),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        );

        let clip = voice_over(&studio, "hello", None).await.unwrap();
        assert!(!clip.audio_url.is_empty());

        let clip = voice_over(&studio, "hello", Some("voice-custom")).await.unwrap();
        assert!(!clip.audio_url.is_empty());

        assert_eq!(speech.requested_voices(), vec!["mock-voice", "voice-custom"]);
    }

    #[tokio::test]
    async fn test_render_pending_has_no_url() {
        let studio = Studio::new(
            Arc::new(ScriptedModel::new()),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::pending()),
            Arc::new(StaticScreenshots::new()),
        );

        let spec = RenderSpec {
            script: "hello".to_string(),
            audio_url: Some("https://audio.test/a.mp3".to_string()),
            image_urls: vec![],
            aspect_ratio: AspectRatio::Portrait,
        };

        let clip = render_clip(&studio, &spec).await.unwrap();
        assert!(clip.video_url.is_none());
    }
}
