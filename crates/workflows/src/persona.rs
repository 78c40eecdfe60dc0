//! Influencer persona synthesis with degraded-mode fallbacks.
//!
//! Two things can go wrong here and neither fails the operation: an
//! unparseable persona reply falls back to one of eight canned personas,
//! and a failed avatar render falls back to a placeholder URL built from
//! the persona name. Both degrades are logged at `warn!` and reported to
//! the caller through [`PersonaProfile::used_fallback`].

use database::models::{Project, VisualProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vendor_core::CompletionRequest;

use crate::error::WorkflowError;
use crate::parse::parse_llm_json;
use crate::prompts;
use crate::studio::Studio;

/// A synthesized influencer persona, before persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub gender: String,
    pub personality: String,
    pub backstory: String,
    pub appearance: String,
    pub visual_profile: VisualProfile,
}

/// The result of persona creation.
#[derive(Debug, Clone)]
pub struct PersonaProfile {
    pub persona: Persona,
    pub avatar_url: String,
    /// True when the canned-persona or placeholder-avatar path was taken.
    pub used_fallback: bool,
}

/// Synthesize a persona for a project and render its avatar.
pub async fn create_persona(
    studio: &Studio,
    project: &Project,
    gender: &str,
) -> Result<PersonaProfile, WorkflowError> {
    info!(project_id = %project.id, gender, "Creating influencer persona");

    let reply = studio
        .language()
        .complete(
            CompletionRequest::new(prompts::PERSONA_SYSTEM, &prompts::persona_prompt(project, gender))
                .json(),
        )
        .await?;

    let (persona, mut used_fallback) = match parse_llm_json::<Persona>(&reply) {
        Ok(persona) if !persona.name.is_empty() => (persona, false),
        Ok(_) => {
            warn!(project_id = %project.id, "Persona reply had no name, using fallback persona");
            (fallback_persona(gender), true)
        }
        Err(e) => {
            warn!(project_id = %project.id, error = %e, "Persona reply unparseable, using fallback persona");
            (fallback_persona(gender), true)
        }
    };

    let avatar_url = match studio.image().generate(&avatar_prompt(&persona)).await {
        Ok(image) => image.url,
        Err(e) => {
            warn!(
                persona = %persona.name,
                error = %e,
                "Avatar generation failed, using placeholder avatar"
            );
            used_fallback = true;
            placeholder_avatar(&persona.name)
        }
    };

    Ok(PersonaProfile {
        persona,
        avatar_url,
        used_fallback,
    })
}

fn avatar_prompt(persona: &Persona) -> String {
    format!(
        "Portrait of {}, {}. Style: {}. Palette: {}. Lighting: {}. Setting: {}.",
        persona.name,
        persona.appearance,
        persona.visual_profile.art_style,
        persona.visual_profile.color_palette.join(", "),
        persona.visual_profile.lighting,
        persona.visual_profile.setting,
    )
}

/// Deterministic avatar URL built from the persona name. Used when the
/// image vendor is down or unconfigured.
fn placeholder_avatar(name: &str) -> String {
    let encoded = name.trim().replace(' ', "+");
    format!("https://ui-avatars.com/api/?name={encoded}&size=512&background=0D8ABC&color=fff")
}

/// Pick a canned persona at random, honoring the requested gender when one
/// was requested.
fn fallback_persona(gender: &str) -> Persona {
    let mut candidates: Vec<&CannedPersona> = FALLBACK_PERSONAS
        .iter()
        .filter(|p| gender.is_empty() || p.gender == gender)
        .collect();

    // An unknown gender string matches nothing; use the full roster.
    if candidates.is_empty() {
        candidates = FALLBACK_PERSONAS.iter().collect();
    }

    let pick = candidates[rand::thread_rng().gen_range(0..candidates.len())];
    pick.to_persona()
}

struct CannedPersona {
    name: &'static str,
    gender: &'static str,
    personality: &'static str,
    backstory: &'static str,
    appearance: &'static str,
}

impl CannedPersona {
    fn to_persona(&self) -> Persona {
        Persona {
            name: self.name.to_string(),
            gender: self.gender.to_string(),
            personality: self.personality.to_string(),
            backstory: self.backstory.to_string(),
            appearance: self.appearance.to_string(),
            visual_profile: VisualProfile {
                art_style: "photorealistic".to_string(),
                color_palette: vec!["warm neutrals".to_string()],
                lighting: "soft daylight".to_string(),
                setting: "home studio".to_string(),
            },
        }
    }
}

const FALLBACK_PERSONAS: [CannedPersona; 8] = [
    CannedPersona {
        name: "Maya Chen",
        gender: "female",
        personality: "Warm, direct, a little wry",
        backstory: "Former operations manager who started reviewing tools she actually used",
        appearance: "Mid-30s, short dark hair, denim jacket",
    },
    CannedPersona {
        name: "Jordan Reyes",
        gender: "male",
        personality: "High energy, hands-on, skeptical of hype",
        backstory: "Ran a two-person agency before going full-time on content",
        appearance: "Late 20s, athletic build, rolled-up sleeves",
    },
    CannedPersona {
        name: "Priya Nair",
        gender: "female",
        personality: "Calm, analytical, generous with detail",
        backstory: "Ex-consultant who explains business tools without the jargon",
        appearance: "Early 30s, long black hair, blazer over a t-shirt",
    },
    CannedPersona {
        name: "Sam Okafor",
        gender: "male",
        personality: "Dry humor, story-first, never oversells",
        backstory: "Built and sold a small e-commerce brand, now teaches what worked",
        appearance: "Late 30s, glasses, close-cropped beard",
    },
    CannedPersona {
        name: "Lena Kovacs",
        gender: "female",
        personality: "Blunt, fast-talking, ruthlessly practical",
        backstory: "Growth marketer who got tired of dashboards and started filming",
        appearance: "Late 20s, blonde bob, bold earrings",
    },
    CannedPersona {
        name: "Dev Sharma",
        gender: "male",
        personality: "Curious, upbeat, loves a live demo",
        backstory: "Self-taught developer who reviews software by building with it",
        appearance: "Mid-20s, messy hair, hoodie",
    },
    CannedPersona {
        name: "Aisha Bello",
        gender: "female",
        personality: "Polished, empathetic, audience-first",
        backstory: "Former TV producer applying broadcast instincts to short video",
        appearance: "Mid-30s, braids, tailored jacket",
    },
    CannedPersona {
        name: "Marcus Hale",
        gender: "male",
        personality: "Measured, credible, numbers in every take",
        backstory: "Twenty years in B2B sales before moving in front of the camera",
        appearance: "Early 40s, gray at the temples, open collar",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use mock_vendors::{
        FailingImageModel, ScriptedModel, StaticImageModel, StaticScreenshots, StaticSpeechModel,
        StaticVideoModel,
    };
    use std::sync::Arc;

    const PERSONA_JSON: &str = r#"{
        "name": "Rae Winters",
        "gender": "female",
        "personality": "Dry and precise",
        "backstory": "Former barista, now reviews espresso gear",
        "appearance": "Red hair, apron",
        "visualProfile": {
            "artStyle": "photorealistic",
            "colorPalette": ["espresso brown"],
            "lighting": "morning light",
            "setting": "cafe counter"
        }
    }"#;

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

    #[tokio::test]
    async fn test_persona_happy_path() {
        let studio = Studio::new(
            Arc::new(ScriptedModel::with_replies([PERSONA_JSON])),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        );

        let profile = create_persona(&studio, &sample_project(), "female")
            .await
            .unwrap();

        assert_eq!(profile.persona.name, "Rae Winters");
        assert!(!profile.used_fallback);
        assert!(profile.avatar_url.starts_with("https://images.test/"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_canned_persona() {
        let studio = Studio::new(
            Arc::new(ScriptedModel::with_replies(["sorry, no can do"])),
            Arc::new(StaticImageModel::default()),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        );

        let profile = create_persona(&studio, &sample_project(), "female")
            .await
            .unwrap();

        assert!(profile.used_fallback);
        assert_eq!(profile.persona.gender, "female");
        assert!(!profile.persona.name.is_empty());
    }

    #[tokio::test]
    async fn test_image_failure_uses_placeholder_avatar() {
        let studio = Studio::new(
            Arc::new(ScriptedModel::with_replies([PERSONA_JSON])),
            Arc::new(FailingImageModel),
            Arc::new(StaticSpeechModel::default()),
            Arc::new(StaticVideoModel::new()),
            Arc::new(StaticScreenshots::new()),
        );

        let profile = create_persona(&studio, &sample_project(), "female")
            .await
            .unwrap();

        assert!(profile.used_fallback);
        assert_eq!(
            profile.avatar_url,
            "https://ui-avatars.com/api/?name=Rae+Winters&size=512&background=0D8ABC&color=fff"
        );
    }

    #[test]
    fn test_fallback_roster_respects_gender() {
        for _ in 0..20 {
            assert_eq!(fallback_persona("male").gender, "male");
            assert_eq!(fallback_persona("female").gender, "female");
        }
        // Unknown or empty gender still yields a persona.
        assert!(!fallback_persona("").name.is_empty());
        assert!(!fallback_persona("nonbinary").name.is_empty());
    }
}
