//! Post-onboarding analysis runs: competitor landscape and ad copy.

use database::models::{AdCopyVariations, CompetitorAnalysis, Project};
use tracing::info;
use vendor_core::CompletionRequest;

use crate::error::WorkflowError;
use crate::parse::parse_llm_json;
use crate::prompts;
use crate::studio::Studio;

/// Analyze the competitive landscape for a project.
pub async fn analyze_competitors(
    studio: &Studio,
    project: &Project,
) -> Result<CompetitorAnalysis, WorkflowError> {
    info!(project_id = %project.id, "Running competitor analysis");

    let reply = studio
        .language()
        .complete(
            CompletionRequest::new(prompts::COMPETITOR_SYSTEM, &prompts::competitor_prompt(project))
                .json(),
        )
        .await?;

    parse_llm_json(&reply)
}

/// Generate ad copy variations for a project.
pub async fn generate_ad_copy(
    studio: &Studio,
    project: &Project,
) -> Result<AdCopyVariations, WorkflowError> {
    info!(project_id = %project.id, "Generating ad copy");

    let reply = studio
        .language()
        .complete(
            CompletionRequest::new(prompts::AD_COPY_SYSTEM, &prompts::ad_copy_prompt(project)).json(),
        )
        .await?;

    let variations: AdCopyVariations = parse_llm_json(&reply)?;
    if variations.variations.is_empty() {
        return Err(WorkflowError::InvalidResponse(
            "ad copy run returned no variations".to_string(),
        ));
    }

    Ok(variations)
}
