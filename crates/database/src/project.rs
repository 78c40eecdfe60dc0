//! Project CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{AdCopyVariations, AnalysisStatus, CompetitorAnalysis, Project};

const COLUMNS: &str = "id, user_id, source_url, name, description, value_proposition, \
     target_audience, competitors, marketing_constitution, competitor_analysis, \
     ad_copy_variations, analysis_status, created_at, updated_at";

/// Create a new project.
pub async fn create_project(pool: &SqlitePool, project: &Project) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO projects (
            id, user_id, source_url, name, description, value_proposition,
            target_audience, competitors, marketing_constitution, analysis_status
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&project.id)
    .bind(&project.user_id)
    .bind(&project.source_url)
    .bind(&project.name)
    .bind(&project.description)
    .bind(&project.value_proposition)
    .bind(&project.target_audience)
    .bind(&project.competitors)
    .bind(&project.marketing_constitution)
    .bind(project.analysis_status)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Project",
                    id: project.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a project by ID.
pub async fn get_project(pool: &SqlitePool, id: &str) -> Result<Project> {
    sqlx::query_as::<_, Project>(&format!(
        "SELECT {COLUMNS} FROM projects WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

/// List all projects owned by a user, newest first.
pub async fn list_projects_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(&format!(
        "SELECT {COLUMNS} FROM projects WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

/// Update a project's analysis status.
pub async fn set_analysis_status(
    pool: &SqlitePool,
    id: &str,
    status: AnalysisStatus,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE projects
        SET analysis_status = ?, updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Project",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Store the competitor-analysis blob for a project.
pub async fn store_competitor_analysis(
    pool: &SqlitePool,
    id: &str,
    analysis: &CompetitorAnalysis,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE projects
        SET competitor_analysis = ?, updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(sqlx::types::Json(analysis))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Project",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Store the ad-copy-variations blob for a project.
pub async fn store_ad_copy_variations(
    pool: &SqlitePool,
    id: &str,
    variations: &AdCopyVariations,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE projects
        SET ad_copy_variations = ?, updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(sqlx::types::Json(variations))
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Project",
            id: id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_project, test_db};

    #[tokio::test]
    async fn test_project_crud() {
        let db = test_db().await;
        let project = sample_project("user-1");

        create_project(db.pool(), &project).await.unwrap();

        let fetched = get_project(db.pool(), &project.id).await.unwrap();
        assert_eq!(fetched.name, "Example Co");
        assert_eq!(fetched.target_audience.demographics, "25-40, urban");
        assert_eq!(fetched.analysis_status, AnalysisStatus::Completed);
        assert!(fetched.competitor_analysis.is_none());

        let listed = list_projects_for_user(db.pool(), "user-1").await.unwrap();
        assert_eq!(listed.len(), 1);

        let other = list_projects_for_user(db.pool(), "user-2").await.unwrap();
        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_already_exists() {
        let db = test_db().await;
        let project = sample_project("user-1");

        create_project(db.pool(), &project).await.unwrap();
        let result = create_project(db.pool(), &project).await;
        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "Project", .. })
        ));
    }

    #[tokio::test]
    async fn test_store_competitor_analysis() {
        let db = test_db().await;
        let project = sample_project("user-1");
        create_project(db.pool(), &project).await.unwrap();

        let analysis = CompetitorAnalysis {
            competitors: vec![],
            opportunities: vec!["video-first content".to_string()],
            summary: "open field".to_string(),
        };
        store_competitor_analysis(db.pool(), &project.id, &analysis)
            .await
            .unwrap();

        let fetched = get_project(db.pool(), &project.id).await.unwrap();
        assert_eq!(
            fetched.competitor_analysis.unwrap().summary,
            "open field"
        );
    }

    #[tokio::test]
    async fn test_missing_project_is_not_found() {
        let db = test_db().await;
        let result = get_project(db.pool(), "nope").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));

        let result = set_analysis_status(db.pool(), "nope", AnalysisStatus::Failed).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
