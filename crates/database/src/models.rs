//! Database models.
//!
//! Structured blobs (`TargetAudience`, `MarketingConstitution`, etc.) are
//! stored as JSON text columns via `sqlx::types::Json` and validated at the
//! boundary where they are built, not trusted as free-form values.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Social platform a video targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
    Linkedin,
}

impl Platform {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Linkedin => "linkedin",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// Lifecycle of a project's website analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Pending,
    Analyzing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "pending",
            AnalysisStatus::Analyzing => "analyzing",
            AnalysisStatus::Completed => "completed",
            AnalysisStatus::Failed => "failed",
        }
    }
}

/// Influencer readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum InfluencerStatus {
    Ready,
    Failed,
}

/// Video generation lifecycle.
///
/// The only legal paths are
/// `scripting → voicing → rendering → ready` (voicing is skipped when no
/// voice exists) and any non-terminal state `→ failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum VideoStatus {
    Scripting,
    Voicing,
    Rendering,
    Ready,
    Failed,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Scripting => "scripting",
            VideoStatus::Voicing => "voicing",
            VideoStatus::Rendering => "rendering",
            VideoStatus::Ready => "ready",
            VideoStatus::Failed => "failed",
        }
    }

    /// Whether this state can never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoStatus::Ready | VideoStatus::Failed)
    }

    /// Whether a transition to `to` is allowed.
    pub fn can_transition(&self, to: VideoStatus) -> bool {
        use VideoStatus::*;
        match (self, to) {
            (Scripting, Voicing) | (Scripting, Rendering) => true,
            (Voicing, Rendering) => true,
            (Rendering, Ready) => true,
            (from, Failed) if !from.is_terminal() => true,
            _ => false,
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a project's marketing should speak to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TargetAudience {
    pub demographics: String,
    pub interests: Vec<String>,
    pub pain_points: Vec<String>,
}

/// The brand rulebook every later generation step follows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketingConstitution {
    pub brand_voice: String,
    pub content_pillars: Vec<String>,
    pub messaging_framework: String,
    pub visual_guidelines: String,
}

/// Visual identity of an influencer, fed into image and video prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualProfile {
    pub art_style: String,
    pub color_palette: Vec<String>,
    pub lighting: String,
    pub setting: String,
}

/// One analyzed competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub name: String,
    pub positioning: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Stored result of a competitor-analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub competitors: Vec<CompetitorProfile>,
    pub opportunities: Vec<String>,
    pub summary: String,
}

/// One ad copy variation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCopy {
    pub headline: String,
    pub body: String,
    pub cta: String,
}

/// Stored result of an ad-copy generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCopyVariations {
    pub variations: Vec<AdCopy>,
}

/// Per-video extras: hook/cta/hashtags plus the failure message when the
/// lifecycle ended in `failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoMetadata {
    pub hook: Option<String>,
    pub cta: Option<String>,
    pub hashtags: Vec<String>,
    pub error: Option<String>,
}

/// A single storyboard scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scene {
    pub description: String,
    pub voiceover: String,
    pub duration_secs: f64,
}

/// Problem/solution framing for a storyboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProblemSolution {
    pub problem: String,
    pub solution: String,
}

/// Scene plan produced by the scripting step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storyboard {
    pub hook_variations: Vec<String>,
    pub scenes: Vec<Scene>,
    pub problem_solution: Option<ProblemSolution>,
}

/// A marketing project derived from one onboarded website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    /// Owning user id (from the session).
    pub user_id: String,
    /// Website the analysis was derived from.
    pub source_url: String,
    pub name: String,
    pub description: String,
    pub value_proposition: String,
    pub target_audience: Json<TargetAudience>,
    pub competitors: Json<Vec<String>>,
    pub marketing_constitution: Json<MarketingConstitution>,
    pub competitor_analysis: Option<Json<CompetitorAnalysis>>,
    pub ad_copy_variations: Option<Json<AdCopyVariations>>,
    pub analysis_status: AnalysisStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// The synthetic persona fronting a project's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: String,
    /// Owning project. UNIQUE in the schema: one influencer per project.
    pub project_id: String,
    pub name: String,
    pub gender: String,
    pub personality: String,
    pub backstory: String,
    pub appearance: String,
    pub visual_profile: Json<VisualProfile>,
    pub avatar_url: String,
    pub voice_id: Option<String>,
    pub status: InfluencerStatus,
    pub created_at: String,
}

/// A generated (or in-flight) marketing video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub project_id: String,
    /// Null when the project had no influencer at generation time.
    pub influencer_id: Option<String>,
    pub platform: Platform,
    pub status: VideoStatus,
    pub title: String,
    pub script: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<f64>,
    pub metadata: Json<VideoMetadata>,
    pub storyboard: Option<Json<Storyboard>>,
    pub created_at: String,
    /// When `status` last changed; drives the stale sweep.
    pub status_changed_at: String,
}

impl Video {
    /// A fresh row in the `scripting` state. Timestamps come from the
    /// insert defaults.
    pub fn new(project_id: &str, influencer_id: Option<&str>, platform: Platform) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            influencer_id: influencer_id.map(str::to_string),
            platform,
            status: VideoStatus::Scripting,
            title: String::new(),
            script: String::new(),
            video_url: None,
            thumbnail_url: None,
            duration_secs: None,
            metadata: Json(VideoMetadata::default()),
            storyboard: None,
            created_at: String::new(),
            status_changed_at: String::new(),
        }
    }
}

/// A file captured or uploaded during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub project_id: String,
    /// Type tag, currently only "screenshot".
    pub kind: String,
    pub file_name: String,
    pub file_path: String,
    pub created_at: String,
}

impl Asset {
    /// A screenshot asset pointing at a hosted capture.
    pub fn screenshot(project_id: &str, file_name: &str, file_path: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            kind: "screenshot".to_string(),
            file_name: file_name.to_string(),
            file_path: file_path.to_string(),
            created_at: String::new(),
        }
    }
}

/// A standalone generated marketing image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub project_id: String,
    pub prompt: String,
    pub image_url: String,
    pub created_at: String,
}

/// A bearer-token session mapping to a user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trip() {
        for platform in [Platform::Instagram, Platform::Tiktok, Platform::Linkedin] {
            assert_eq!(Platform::from_str(platform.as_str()).unwrap(), platform);
        }
        assert!(Platform::from_str("youtube").is_err());
    }

    #[test]
    fn test_video_status_transitions() {
        use VideoStatus::*;

        assert!(Scripting.can_transition(Voicing));
        assert!(Scripting.can_transition(Rendering)); // no voice, skip voicing
        assert!(Voicing.can_transition(Rendering));
        assert!(Rendering.can_transition(Ready));
        assert!(Scripting.can_transition(Failed));
        assert!(Voicing.can_transition(Failed));
        assert!(Rendering.can_transition(Failed));

        assert!(!Scripting.can_transition(Ready));
        assert!(!Voicing.can_transition(Scripting));
        assert!(!Ready.can_transition(Failed));
        assert!(!Failed.can_transition(Scripting));
    }

    #[test]
    fn test_blob_defaults_from_empty_object() {
        let audience: TargetAudience = serde_json::from_str("{}").unwrap();
        assert!(audience.interests.is_empty());

        let constitution: MarketingConstitution = serde_json::from_str("{}").unwrap();
        assert!(constitution.brand_voice.is_empty());
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = VideoMetadata {
            hook: Some("stop scrolling".to_string()),
            cta: None,
            hashtags: vec!["#ai".to_string()],
            error: None,
        };
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains(r##""hashtags":["#ai"]"##));
        assert!(json.contains(r#""hook":"stop scrolling""#));
    }

    #[test]
    fn test_new_video_starts_scripting() {
        let video = Video::new("proj-1", None, Platform::Linkedin);
        assert_eq!(video.status, VideoStatus::Scripting);
        assert!(video.influencer_id.is_none());
        assert!(!video.id.is_empty());
    }
}
