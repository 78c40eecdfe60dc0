//! Influencer deletion.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use database::influencer;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::authenticate;
use crate::error::Result;
use crate::routes::owned_project;
use crate::state::AppState;

/// DELETE /api/influencer/{id}
///
/// Ownership is checked through the parent project's owner.
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let user_id = authenticate(&state.db, &headers).await?;

    let row = influencer::get_influencer(state.db.pool(), &id).await?;
    owned_project(&state.db, &row.project_id, &user_id).await?;

    influencer::delete_influencer(state.db.pool(), &id).await?;
    info!(influencer_id = %id, "Deleted influencer");

    Ok(Json(json!({ "success": true })))
}
