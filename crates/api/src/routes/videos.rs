//! Video deletion.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use database::video;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::authenticate;
use crate::error::Result;
use crate::routes::owned_project;
use crate::state::AppState;

/// DELETE /api/videos/{id}
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;

    let row = video::get_video(state.db.pool(), &id).await?;
    owned_project(&state.db, &row.project_id, &user_id).await?;

    video::delete_video(state.db.pool(), &id).await?;
    info!(video_id = %id, "Deleted video");

    Ok(Json(json!({ "success": true })))
}
