//! Website onboarding: screenshots, site analysis, marketing constitution.

use database::models::{MarketingConstitution, TargetAudience};
use serde::{Deserialize, Serialize};
use tracing::info;
use vendor_core::{CapturedShot, CompletionRequest};

use crate::error::WorkflowError;
use crate::parse::parse_llm_json;
use crate::prompts;
use crate::studio::Studio;

/// What the analysis step infers about a website.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteAnalysis {
    pub name: String,
    pub description: String,
    pub value_proposition: String,
    pub target_audience: TargetAudience,
    pub competitors: Vec<String>,
}

/// Everything onboarding produces. The caller persists it as one project
/// plus one asset row per screenshot.
#[derive(Debug, Clone)]
pub struct Onboarding {
    pub analysis: SiteAnalysis,
    pub constitution: MarketingConstitution,
    pub screenshots: Vec<CapturedShot>,
}

/// Onboard a website URL.
///
/// Three sequential vendor calls: capture screenshots, analyze the site,
/// derive the constitution. Any failure fails the whole operation; nothing
/// here writes to the database, so a failed onboarding leaves no trace.
pub async fn onboard(studio: &Studio, url: &str) -> Result<Onboarding, WorkflowError> {
    info!(url, "Starting onboarding");

    let screenshots = studio.screenshots().capture(url).await?;
    let shot_urls: Vec<String> = screenshots.iter().map(|s| s.url.clone()).collect();

    let analysis_reply = studio
        .language()
        .complete(
            CompletionRequest::new(
                prompts::SITE_ANALYSIS_SYSTEM,
                &prompts::site_analysis_prompt(url, &shot_urls),
            )
            .json(),
        )
        .await?;
    let analysis: SiteAnalysis = parse_llm_json(&analysis_reply)?;

    if analysis.name.is_empty() {
        return Err(WorkflowError::InvalidResponse(
            "site analysis returned an empty company name".to_string(),
        ));
    }

    let constitution_reply = studio
        .language()
        .complete(
            CompletionRequest::new(
                prompts::CONSTITUTION_SYSTEM,
                &prompts::constitution_prompt(
                    &analysis.name,
                    &analysis.description,
                    &analysis.value_proposition,
                ),
            )
            .json(),
        )
        .await?;
    let constitution: MarketingConstitution = parse_llm_json(&constitution_reply)?;

    info!(
        company = %analysis.name,
        screenshots = screenshots.len(),
        "Onboarding complete"
    );

    Ok(Onboarding {
        analysis,
        constitution,
        screenshots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_vendors::{
        ScriptedModel, StaticImageModel, StaticScreenshots, StaticSpeechModel, StaticVideoModel,
    };
    use std::sync::Arc;

    const ANALYSIS_JSON: &str = r#"{
        "name": "Example Co",
        "description": "Ships widgets overnight",
        "valueProposition": "Widgets by morning",
        "targetAudience": {
            "demographics": "25-40, urban",
            "interests": ["logistics"],
            "painPoints": ["slow shipping"]
        },
        "competitors": ["widgetrival.com"]
    }"#;

    const CONSTITUTION_JSON: &str = r#"{
        "brandVoice": "Confident",
        "contentPillars": ["speed"],
        "messagingFramework": "problem-agitate-solve",
        "visualGuidelines": "Bold colors"
    }"#;

    fn studio_with_language(language: ScriptedModel) -> Studio {
        Studio::new(
            Arc::new(language),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        )
    }

    #[tokio::test]
    async fn test_onboard_happy_path() {
        let language = ScriptedModel::with_replies([ANALYSIS_JSON, CONSTITUTION_JSON]);
        let studio = studio_with_language(language);

        let result = onboard(&studio, "https://example.com").await.unwrap();

        assert_eq!(result.analysis.name, "Example Co");
        assert_eq!(result.constitution.brand_voice, "Confident");
        assert_eq!(result.screenshots.len(), 2);
        assert_eq!(result.analysis.target_audience.pain_points, ["slow shipping"]);
    }

    #[tokio::test]
    async fn test_onboard_fails_on_unparseable_analysis() {
        let language = ScriptedModel::with_replies(["not json at all", CONSTITUTION_JSON]);
        let studio = studio_with_language(language);

        let result = onboard(&studio, "https://example.com").await;
        assert!(matches!(result, Err(WorkflowError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_onboard_rejects_empty_name() {
        let empty_name = ANALYSIS_JSON.replace("Example Co", "");
        let language = ScriptedModel::with_replies([empty_name.as_str(), CONSTITUTION_JSON]);
        let studio = studio_with_language(language);

        let result = onboard(&studio, "https://example.com").await;
        assert!(matches!(result, Err(WorkflowError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_onboard_asks_for_json_replies() {
        let language = Arc::new(ScriptedModel::with_replies([
            ANALYSIS_JSON,
            CONSTITUTION_JSON,
        ]));
        let studio = Studio::new(
            language.clone(),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        );
        onboard(&studio, "https://example.com").await.unwrap();

        let requests = language.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.json_response));
        assert!(requests[0]
            .user_text()
            .unwrap_or_default()
            .contains("https://example.com"));
    }
}
