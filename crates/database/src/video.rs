//! Video CRUD and lifecycle operations.
//!
//! Status changes go through [`transition_status`], which enforces the
//! `scripting → voicing → rendering → ready | failed` machine and stamps
//! `status_changed_at`. Rows stuck in a non-terminal state are reaped two
//! ways: [`fail_in_flight_for_project`] when a new generation run starts,
//! and [`mark_stale_failed`] from the periodic sweep.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DatabaseError, Result};
use crate::models::{Storyboard, Video, VideoMetadata, VideoStatus};

const COLUMNS: &str = "id, project_id, influencer_id, platform, status, title, script, \
     video_url, thumbnail_url, duration_secs, metadata, storyboard, created_at, \
     status_changed_at";

/// Create a new video row (normally in the `scripting` state).
pub async fn create_video(pool: &SqlitePool, video: &Video) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO videos (
            id, project_id, influencer_id, platform, status, title, script,
            video_url, thumbnail_url, duration_secs, metadata, storyboard
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&video.id)
    .bind(&video.project_id)
    .bind(&video.influencer_id)
    .bind(video.platform)
    .bind(video.status)
    .bind(&video.title)
    .bind(&video.script)
    .bind(&video.video_url)
    .bind(&video.thumbnail_url)
    .bind(video.duration_secs)
    .bind(&video.metadata)
    .bind(&video.storyboard)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Video",
                    id: video.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a video by ID.
pub async fn get_video(pool: &SqlitePool, id: &str) -> Result<Video> {
    sqlx::query_as::<_, Video>(&format!("SELECT {COLUMNS} FROM videos WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Video",
            id: id.to_string(),
        })
}

/// List all videos for a project, newest first.
pub async fn list_videos_for_project(pool: &SqlitePool, project_id: &str) -> Result<Vec<Video>> {
    let videos = sqlx::query_as::<_, Video>(&format!(
        "SELECT {COLUMNS} FROM videos WHERE project_id = ? ORDER BY created_at DESC"
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(videos)
}

/// Store the scripting step's output on a video.
pub async fn update_script(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    script: &str,
    metadata: &VideoMetadata,
    storyboard: Option<&Storyboard>,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE videos
        SET title = ?, script = ?, metadata = ?, storyboard = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(script)
    .bind(sqlx::types::Json(metadata))
    .bind(storyboard.map(sqlx::types::Json))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Video",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Store the render step's output. Absent fields stay untouched on purpose:
/// a pending render has no URL yet.
pub async fn set_media(
    pool: &SqlitePool,
    id: &str,
    video_url: Option<&str>,
    thumbnail_url: Option<&str>,
    duration_secs: Option<f64>,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE videos
        SET video_url = COALESCE(?, video_url),
            thumbnail_url = COALESCE(?, thumbnail_url),
            duration_secs = COALESCE(?, duration_secs)
        WHERE id = ?
        "#,
    )
    .bind(video_url)
    .bind(thumbnail_url)
    .bind(duration_secs)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Video",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Move a video to a new lifecycle state.
///
/// The update is conditioned on the current status, so a concurrent writer
/// that moved the row first turns this into `InvalidTransition` rather
/// than a silent overwrite.
pub async fn transition_status(pool: &SqlitePool, id: &str, to: VideoStatus) -> Result<()> {
    let current = get_video(pool, id).await?.status;

    if !current.can_transition(to) {
        return Err(DatabaseError::InvalidTransition {
            entity: "Video",
            from: current.to_string(),
            to: to.to_string(),
        });
    }

    let result = sqlx::query(
        r#"
        UPDATE videos
        SET status = ?, status_changed_at = datetime('now')
        WHERE id = ? AND status = ?
        "#,
    )
    .bind(to)
    .bind(id)
    .bind(current)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::InvalidTransition {
            entity: "Video",
            from: current.to_string(),
            to: to.to_string(),
        });
    }

    Ok(())
}

/// Mark a video failed and record the reason in its metadata. Used by the
/// catch-all error path, so it accepts any non-terminal starting state.
pub async fn fail_with_error(pool: &SqlitePool, id: &str, message: &str) -> Result<()> {
    let video = get_video(pool, id).await?;

    let mut metadata = video.metadata.0;
    metadata.error = Some(message.to_string());

    let result = sqlx::query(
        r#"
        UPDATE videos
        SET status = 'failed', metadata = ?, status_changed_at = datetime('now')
        WHERE id = ? AND status NOT IN ('ready', 'failed')
        "#,
    )
    .bind(sqlx::types::Json(&metadata))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::InvalidTransition {
            entity: "Video",
            from: video.status.to_string(),
            to: VideoStatus::Failed.to_string(),
        });
    }

    Ok(())
}

/// Fail every in-flight video for a project. Called when a new generation
/// run starts so abandoned rows do not linger as "in progress".
pub async fn fail_in_flight_for_project(pool: &SqlitePool, project_id: &str) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE videos
        SET status = 'failed', status_changed_at = datetime('now')
        WHERE project_id = ? AND status IN ('scripting', 'voicing', 'rendering')
        "#,
    )
    .bind(project_id)
    .execute(pool)
    .await?;

    let swept = result.rows_affected();
    if swept > 0 {
        info!(project_id = %project_id, swept, "Failed in-flight videos before new run");
    }

    Ok(swept)
}

/// Fail every video that has sat in a non-terminal state longer than
/// `older_than_secs`. Returns the number of rows swept.
pub async fn mark_stale_failed(pool: &SqlitePool, older_than_secs: u64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE videos
        SET status = 'failed', status_changed_at = datetime('now')
        WHERE status IN ('scripting', 'voicing', 'rendering')
          AND status_changed_at <= datetime('now', '-' || ? || ' seconds')
        "#,
    )
    .bind(older_than_secs as i64)
    .execute(pool)
    .await?;

    let swept = result.rows_affected();
    if swept > 0 {
        info!(swept, older_than_secs, "Failed stale in-flight videos");
    }

    Ok(swept)
}

/// Delete a video by ID.
pub async fn delete_video(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM videos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Video",
            id: id.to_string(),
        });
    }

    Ok(())
}
