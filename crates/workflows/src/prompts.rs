//! Prompt templates for the LLM-backed workflow steps.
//!
//! Every template that expects structured output spells out the exact JSON
//! shape, field by field, in camelCase to match the blob structs the reply
//! is deserialized into.

use database::models::Project;

/// System prompt for the site-analysis step of onboarding.
pub const SITE_ANALYSIS_SYSTEM: &str = "You are a marketing strategist. Given a company website \
URL and screenshots of its pages, infer what the company does and who it sells to. Respond with \
only a JSON object, no prose, in this exact shape: {\"name\": string, \"description\": string, \
\"valueProposition\": string, \"targetAudience\": {\"demographics\": string, \"interests\": \
[string], \"painPoints\": [string]}, \"competitors\": [string]}";

/// System prompt for deriving the marketing constitution from an analysis.
pub const CONSTITUTION_SYSTEM: &str = "You are a brand strategist. Given a company analysis, \
write its marketing constitution. Respond with only a JSON object in this exact shape: \
{\"brandVoice\": string, \"contentPillars\": [string], \"messagingFramework\": string, \
\"visualGuidelines\": string}";

/// System prompt for synthesizing an influencer persona.
pub const PERSONA_SYSTEM: &str = "You invent believable social-media creator personas for \
brands. Respond with only a JSON object in this exact shape: {\"name\": string, \"gender\": \
string, \"personality\": string, \"backstory\": string, \"appearance\": string, \
\"visualProfile\": {\"artStyle\": string, \"colorPalette\": [string], \"lighting\": string, \
\"setting\": string}}";

/// System prompt for writing a short-form video script.
pub const SCRIPT_SYSTEM: &str = "You write scripts for short vertical marketing videos. Respond \
with only a JSON object in this exact shape: {\"title\": string, \"hook\": string, \"cta\": \
string, \"hashtags\": [string], \"script\": string, \"storyboard\": {\"hookVariations\": \
[string], \"scenes\": [{\"description\": string, \"voiceover\": string, \"durationSecs\": \
number}], \"problemSolution\": {\"problem\": string, \"solution\": string}}}";

/// System prompt for the competitor-analysis step.
pub const COMPETITOR_SYSTEM: &str = "You are a competitive-intelligence analyst. Respond with \
only a JSON object in this exact shape: {\"competitors\": [{\"name\": string, \"strengths\": \
[string], \"weaknesses\": [string], \"positioning\": string}], \"opportunities\": [string], \
\"summary\": string}";

/// System prompt for generating ad copy variations.
pub const AD_COPY_SYSTEM: &str = "You are a direct-response copywriter. Respond with only a \
JSON object in this exact shape: {\"variations\": [{\"headline\": string, \"body\": string, \
\"cta\": string}]} with exactly three variations.";

/// User prompt asking for a site analysis.
pub fn site_analysis_prompt(url: &str, screenshot_urls: &[String]) -> String {
    format!(
        "Analyze the company at {url}. Page screenshots for reference:\n{}",
        screenshot_urls.join("\n")
    )
}

/// User prompt asking for a marketing constitution.
pub fn constitution_prompt(name: &str, description: &str, value_proposition: &str) -> String {
    format!(
        "Company: {name}\nWhat they do: {description}\nValue proposition: {value_proposition}\n\
         Write the marketing constitution."
    )
}

/// User prompt asking for an influencer persona for a project.
pub fn persona_prompt(project: &Project, gender: &str) -> String {
    format!(
        "Brand: {} — {}\nBrand voice: {}\nTarget audience: {}\nInvent a {gender} creator \
         persona who would credibly promote this brand.",
        project.name,
        project.description,
        project.marketing_constitution.brand_voice,
        project.target_audience.demographics,
    )
}

/// User prompt asking for a platform-specific video script.
pub fn script_prompt(project: &Project, platform: &str, persona_name: Option<&str>) -> String {
    let presenter = persona_name.unwrap_or("an unnamed presenter");
    format!(
        "Write a {platform} video script for {} ({}). Value proposition: {}. Brand voice: {}. \
         Presented by {presenter}. 30 to 45 seconds of voiceover.",
        project.name,
        project.description,
        project.value_proposition,
        project.marketing_constitution.brand_voice,
    )
}

/// User prompt asking for a competitor analysis.
pub fn competitor_prompt(project: &Project) -> String {
    format!(
        "Company: {} — {}\nKnown competitors: {}\nAnalyze the competitive landscape.",
        project.name,
        project.description,
        project.competitors.join(", "),
    )
}

/// User prompt asking for ad copy variations.
pub fn ad_copy_prompt(project: &Project) -> String {
    format!(
        "Company: {} — {}\nValue proposition: {}\nAudience pain points: {}\nWrite the ad copy.",
        project.name,
        project.description,
        project.value_proposition,
        project.target_audience.pain_points.join("; "),
    )
}
