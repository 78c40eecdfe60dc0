//! Route handlers for the factory API.

pub mod health;
pub mod images;
pub mod influencers;
pub mod videos;
pub mod workflows;

use axum::routing::{delete, get, post};
use axum::Router;
use database::models::Project;
use database::{project, Database};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Workflow operations
        .route("/api/workflows/onboard", post(workflows::onboard))
        .route(
            "/api/workflows/create-influencer",
            post(workflows::create_influencer),
        )
        .route(
            "/api/workflows/generate-video",
            post(workflows::generate_video),
        )
        .route(
            "/api/workflows/competitor-analysis",
            post(workflows::competitor_analysis),
        )
        .route("/api/workflows/ad-copy", post(workflows::ad_copy))
        // Generated images
        .route(
            "/api/images",
            get(images::list).post(images::generate).delete(images::remove),
        )
        // Entity deletion
        .route("/api/influencer/:id", delete(influencers::remove))
        .route("/api/videos/:id", delete(videos::remove))
}

/// Fetch a project and verify the caller owns it.
///
/// A missing project is a 404; someone else's project is a 403.
pub(crate) async fn owned_project(
    db: &Database,
    project_id: &str,
    user_id: &str,
) -> Result<Project> {
    let project = project::get_project(db.pool(), project_id).await?;

    if project.user_id != user_id {
        return Err(ApiError::Forbidden);
    }

    Ok(project)
}
