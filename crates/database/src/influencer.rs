//! Influencer CRUD operations.
//!
//! A project has at most one influencer. Creation goes through
//! [`upsert_influencer`], a single atomic `INSERT .. ON CONFLICT` keyed on
//! `project_id`, so a replacement can never leave the project without a
//! row and two concurrent creations cannot produce duplicates.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Influencer;

const COLUMNS: &str = "id, project_id, name, gender, personality, backstory, appearance, \
     visual_profile, avatar_url, voice_id, status, created_at";

/// Create or replace the influencer for a project.
pub async fn upsert_influencer(pool: &SqlitePool, influencer: &Influencer) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO influencers (
            id, project_id, name, gender, personality, backstory, appearance,
            visual_profile, avatar_url, voice_id, status
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(project_id) DO UPDATE SET
            id = excluded.id,
            name = excluded.name,
            gender = excluded.gender,
            personality = excluded.personality,
            backstory = excluded.backstory,
            appearance = excluded.appearance,
            visual_profile = excluded.visual_profile,
            avatar_url = excluded.avatar_url,
            voice_id = excluded.voice_id,
            status = excluded.status,
            created_at = datetime('now')
        "#,
    )
    .bind(&influencer.id)
    .bind(&influencer.project_id)
    .bind(&influencer.name)
    .bind(&influencer.gender)
    .bind(&influencer.personality)
    .bind(&influencer.backstory)
    .bind(&influencer.appearance)
    .bind(&influencer.visual_profile)
    .bind(&influencer.avatar_url)
    .bind(&influencer.voice_id)
    .bind(influencer.status)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get an influencer by ID.
pub async fn get_influencer(pool: &SqlitePool, id: &str) -> Result<Influencer> {
    sqlx::query_as::<_, Influencer>(&format!(
        "SELECT {COLUMNS} FROM influencers WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Influencer",
        id: id.to_string(),
    })
}

/// Get the influencer for a project, if one exists.
pub async fn get_influencer_for_project(
    pool: &SqlitePool,
    project_id: &str,
) -> Result<Option<Influencer>> {
    let influencer = sqlx::query_as::<_, Influencer>(&format!(
        "SELECT {COLUMNS} FROM influencers WHERE project_id = ?"
    ))
    .bind(project_id)
    .fetch_optional(pool)
    .await?;

    Ok(influencer)
}

/// Delete an influencer by ID.
pub async fn delete_influencer(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM influencers
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Influencer",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Count influencers for a project. Should only ever be 0 or 1.
pub async fn count_for_project(pool: &SqlitePool, project_id: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM influencers WHERE project_id = ?
        "#,
    )
    .bind(project_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_influencer, sample_project, test_db};
    use crate::project;

    #[tokio::test]
    async fn test_upsert_and_get() {
        let db = test_db().await;
        let proj = sample_project("user-1");
        project::create_project(db.pool(), &proj).await.unwrap();

        let influencer = sample_influencer(&proj.id);
        upsert_influencer(db.pool(), &influencer).await.unwrap();

        let fetched = get_influencer(db.pool(), &influencer.id).await.unwrap();
        assert_eq!(fetched.name, influencer.name);

        let by_project = get_influencer_for_project(db.pool(), &proj.id)
            .await
            .unwrap();
        assert!(by_project.is_some());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_row() {
        let db = test_db().await;
        let proj = sample_project("user-1");
        project::create_project(db.pool(), &proj).await.unwrap();

        let first = sample_influencer(&proj.id);
        upsert_influencer(db.pool(), &first).await.unwrap();

        let mut second = sample_influencer(&proj.id);
        second.name = "Replacement".to_string();
        upsert_influencer(db.pool(), &second).await.unwrap();

        // Exactly one row, and it is the replacement.
        assert_eq!(count_for_project(db.pool(), &proj.id).await.unwrap(), 1);
        let current = get_influencer_for_project(db.pool(), &proj.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.id, second.id);
        assert_eq!(current.name, "Replacement");

        // The superseded id is gone.
        let old = get_influencer(db.pool(), &first.id).await;
        assert!(matches!(old, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;
        let result = delete_influencer(db.pool(), "nope").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_no_influencer_for_project_is_none() {
        let db = test_db().await;
        let proj = sample_project("user-1");
        project::create_project(db.pool(), &proj).await.unwrap();

        let result = get_influencer_for_project(db.pool(), &proj.id)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
