//! Generated marketing images: list, generate, delete.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use database::models::Image;
use database::image;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::authenticate;
use crate::error::{ApiError, Result};
use crate::routes::owned_project;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    project_id: Option<String>,
}

/// GET /api/images?projectId=
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;

    let project_id = query
        .project_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingField("projectId"))?;
    owned_project(&state.db, &project_id, &user_id).await?;

    let images = image::list_images_for_project(state.db.pool(), &project_id).await?;

    Ok(Json(json!({ "images": images })))
}

/// POST /api/images with `{projectId, prompt}`
///
/// When generation succeeds but the insert fails, the image still exists at
/// the vendor, so the response is a 200 carrying the URL plus a `dbError`
/// telling the client the row was not saved.
pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;

    let project_id = required_str(&body, "projectId")?;
    let prompt = required_str(&body, "prompt")?;
    owned_project(&state.db, project_id, &user_id).await?;

    let generated = state
        .studio
        .image()
        .generate(prompt)
        .await
        .map_err(|e| ApiError::Internal(format!("image generation failed: {e}")))?;

    let row = Image {
        id: Uuid::new_v4().to_string(),
        project_id: project_id.to_string(),
        prompt: prompt.to_string(),
        image_url: generated.url,
        created_at: String::new(),
    };

    match image::create_image(state.db.pool(), &row).await {
        Ok(()) => {
            info!(image_id = %row.id, project_id = %project_id, "Generated image");
            Ok(Json(json!({ "success": true, "image": row })))
        }
        Err(e) => {
            warn!(
                project_id = %project_id,
                error = %e,
                "Image generated but could not be saved"
            );
            Ok(Json(json!({
                "success": true,
                "image": row,
                "dbError": e.to_string(),
            })))
        }
    }
}

/// DELETE /api/images with `{imageId}`
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;

    let image_id = required_str(&body, "imageId")?;

    let row = image::get_image(state.db.pool(), image_id).await?;
    owned_project(&state.db, &row.project_id, &user_id).await?;

    image::delete_image(state.db.pool(), image_id).await?;
    info!(image_id = %image_id, "Deleted image");

    Ok(Json(json!({ "success": true })))
}

pub(crate) fn required_str<'a>(body: &'a Value, field: &'static str) -> Result<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingField(field))
}
