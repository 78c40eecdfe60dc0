//! Workflow endpoints: onboarding, influencer creation, video generation,
//! competitor analysis, ad copy.
//!
//! In webhook mode each handler authenticates the request and forwards the
//! body to the external automation instead of running the workflow here.
//! The CRUD routes in the sibling modules are always served locally.

use std::str::FromStr;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use database::models::{
    AnalysisStatus, Influencer, InfluencerStatus, Platform, Project, Video, VideoMetadata,
    VideoStatus,
};
use database::{asset, influencer, project, video, Json as DbJson};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;
use vendor_core::RenderSpec;
use workflows::{analysis, onboarding, persona, video as video_flow, ScriptBrief};

use crate::auth::authenticate;
use crate::error::{ApiError, Result};
use crate::routes::images::required_str;
use crate::routes::owned_project;
use crate::state::AppState;

/// POST /api/workflows/onboard with `{url}`
pub async fn onboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;
    let url = required_str(&body, "url")?;

    if let Some(forwarder) = &state.forwarder {
        return Ok(Json(forwarder.forward("onboard", &user_id, body).await?));
    }

    let result = onboarding::onboard(&state.studio, url).await?;

    let row = Project {
        id: Uuid::new_v4().to_string(),
        user_id,
        source_url: url.to_string(),
        name: result.analysis.name.clone(),
        description: result.analysis.description.clone(),
        value_proposition: result.analysis.value_proposition.clone(),
        target_audience: DbJson(result.analysis.target_audience.clone()),
        competitors: DbJson(result.analysis.competitors.clone()),
        marketing_constitution: DbJson(result.constitution.clone()),
        competitor_analysis: None,
        ad_copy_variations: None,
        analysis_status: AnalysisStatus::Completed,
        created_at: String::new(),
        updated_at: String::new(),
    };
    project::create_project(state.db.pool(), &row).await?;

    for shot in &result.screenshots {
        let record = database::models::Asset::screenshot(&row.id, &shot.file_name, &shot.url);
        asset::create_asset(state.db.pool(), &record).await?;
    }

    let project = project::get_project(state.db.pool(), &row.id).await?;
    info!(project_id = %project.id, company = %project.name, "Onboarded project");

    Ok(Json(json!({
        "success": true,
        "project": project,
        "analysis": result.analysis,
        "constitution": result.constitution,
    })))
}

/// POST /api/workflows/create-influencer with `{projectId, gender?}`
///
/// Idempotent per project: the row is upserted on the project id, so
/// repeated calls replace the influencer rather than stacking rows.
pub async fn create_influencer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;
    let project_id = required_str(&body, "projectId")?;
    let gender = body.get("gender").and_then(Value::as_str).unwrap_or("");

    if let Some(forwarder) = &state.forwarder {
        return Ok(Json(
            forwarder.forward("create-influencer", &user_id, body).await?,
        ));
    }

    let project = owned_project(&state.db, project_id, &user_id).await?;

    let profile = persona::create_persona(&state.studio, &project, gender).await?;

    let row = Influencer {
        id: Uuid::new_v4().to_string(),
        project_id: project.id.clone(),
        name: profile.persona.name.clone(),
        gender: profile.persona.gender.clone(),
        personality: profile.persona.personality.clone(),
        backstory: profile.persona.backstory.clone(),
        appearance: profile.persona.appearance.clone(),
        visual_profile: DbJson(profile.persona.visual_profile.clone()),
        avatar_url: profile.avatar_url.clone(),
        voice_id: None,
        status: InfluencerStatus::Ready,
        created_at: String::new(),
    };
    influencer::upsert_influencer(state.db.pool(), &row).await?;

    info!(
        project_id = %project.id,
        influencer = %row.name,
        used_fallback = profile.used_fallback,
        "Created influencer"
    );

    Ok(Json(json!({
        "success": true,
        "usedFallback": profile.used_fallback,
        "influencer": {
            "id": row.id,
            "name": row.name,
            "personality": row.personality,
            "backstory": row.backstory,
            "avatarUrl": row.avatar_url,
        },
    })))
}

/// POST /api/workflows/generate-video with `{projectId, platform}`
///
/// The row is created in `scripting` and moved through the lifecycle as
/// each stage completes, so a failure leaves an honest status behind. Any
/// older in-flight rows for the project are failed first.
pub async fn generate_video(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;
    let project_id = required_str(&body, "projectId")?;
    let platform_raw = required_str(&body, "platform")?;
    let platform = Platform::from_str(platform_raw).map_err(|message| ApiError::InvalidField {
        field: "platform",
        message,
    })?;

    if let Some(forwarder) = &state.forwarder {
        return Ok(Json(
            forwarder.forward("generate-video", &user_id, body).await?,
        ));
    }

    let project = owned_project(&state.db, project_id, &user_id).await?;

    video::fail_in_flight_for_project(state.db.pool(), &project.id).await?;

    // No influencer is fine; the video is generated without a presenter.
    let presenter = influencer::get_influencer_for_project(state.db.pool(), &project.id).await?;

    let row = Video::new(&project.id, presenter.as_ref().map(|i| i.id.as_str()), platform);
    video::create_video(state.db.pool(), &row).await?;

    match run_video_stages(&state, &project, presenter.as_ref(), &row.id, platform).await {
        Ok(final_row) => Ok(Json(json!({ "success": true, "video": final_row }))),
        Err(e) => {
            if let Err(mark_err) =
                video::fail_with_error(state.db.pool(), &row.id, &e.to_string()).await
            {
                warn!(video_id = %row.id, error = %mark_err, "Could not mark video failed");
            }
            Err(e)
        }
    }
}

/// The scripting/voicing/rendering pipeline, with a status transition
/// persisted between stages.
async fn run_video_stages(
    state: &AppState,
    project: &Project,
    presenter: Option<&Influencer>,
    video_id: &str,
    platform: Platform,
) -> Result<Video> {
    let pool = state.db.pool();

    let brief = ScriptBrief {
        project,
        platform,
        persona_name: presenter.map(|i| i.name.as_str()),
    };
    let draft = video_flow::write_script(&state.studio, &brief).await?;

    let metadata = VideoMetadata {
        hook: (!draft.hook.is_empty()).then(|| draft.hook.clone()),
        cta: (!draft.cta.is_empty()).then(|| draft.cta.clone()),
        hashtags: draft.hashtags.clone(),
        error: None,
    };
    video::update_script(
        pool,
        video_id,
        &draft.title,
        &draft.script,
        &metadata,
        draft.storyboard.as_ref(),
    )
    .await?;

    // A presented video always gets a voiceover: the influencer's cloned
    // voice when one exists, the studio default otherwise. Videos without
    // a presenter skip straight to rendering.
    let audio_url = match presenter {
        Some(influencer) => {
            video::transition_status(pool, video_id, VideoStatus::Voicing).await?;
            let clip = video_flow::voice_over(
                &state.studio,
                &draft.script,
                influencer.voice_id.as_deref(),
            )
            .await?;
            Some(clip.audio_url)
        }
        None => None,
    };

    video::transition_status(pool, video_id, VideoStatus::Rendering).await?;

    let image_urls = presenter
        .map(|i| vec![i.avatar_url.clone()])
        .unwrap_or_default();
    let spec = RenderSpec {
        script: draft.script.clone(),
        audio_url,
        image_urls,
        aspect_ratio: video_flow::aspect_for(platform),
    };
    let clip = video_flow::render_clip(&state.studio, &spec).await?;

    video::set_media(
        pool,
        video_id,
        clip.video_url.as_deref(),
        clip.thumbnail_url.as_deref(),
        clip.duration_secs,
    )
    .await?;

    // A render that is still queued at the vendor has no URL yet; the row
    // stays `rendering` for the sweep or a later run to resolve.
    if clip.video_url.is_some() {
        video::transition_status(pool, video_id, VideoStatus::Ready).await?;
    }

    let final_row = video::get_video(pool, video_id).await?;
    info!(
        video_id = %video_id,
        status = %final_row.status,
        platform = %platform,
        "Video generation finished"
    );
    Ok(final_row)
}

/// POST /api/workflows/competitor-analysis with `{projectId}`
pub async fn competitor_analysis(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;
    let project_id = required_str(&body, "projectId")?;

    if let Some(forwarder) = &state.forwarder {
        return Ok(Json(
            forwarder
                .forward("competitor-analysis", &user_id, body)
                .await?,
        ));
    }

    let project = owned_project(&state.db, project_id, &user_id).await?;

    let result = analysis::analyze_competitors(&state.studio, &project).await?;
    project::store_competitor_analysis(state.db.pool(), &project.id, &result).await?;

    Ok(Json(json!({ "success": true, "data": result })))
}

/// POST /api/workflows/ad-copy with `{projectId}`
pub async fn ad_copy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;
    let project_id = required_str(&body, "projectId")?;

    if let Some(forwarder) = &state.forwarder {
        return Ok(Json(forwarder.forward("ad-copy", &user_id, body).await?));
    }

    let project = owned_project(&state.db, project_id, &user_id).await?;

    let result = analysis::generate_ad_copy(&state.studio, &project).await?;
    project::store_ad_copy_variations(state.db.pool(), &project.id, &result).await?;

    Ok(Json(json!({ "success": true, "data": result })))
}
