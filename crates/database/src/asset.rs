//! Asset CRUD operations (screenshots and other captured files).

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Asset;

const COLUMNS: &str = "id, project_id, kind, file_name, file_path, created_at";

/// Record an asset for a project.
pub async fn create_asset(pool: &SqlitePool, asset: &Asset) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO assets (id, project_id, kind, file_name, file_path)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&asset.id)
    .bind(&asset.project_id)
    .bind(&asset.kind)
    .bind(&asset.file_name)
    .bind(&asset.file_path)
    .execute(pool)
    .await?;

    Ok(())
}

/// List all assets for a project, newest first.
pub async fn list_assets_for_project(pool: &SqlitePool, project_id: &str) -> Result<Vec<Asset>> {
    let assets = sqlx::query_as::<_, Asset>(&format!(
        "SELECT {COLUMNS} FROM assets WHERE project_id = ? ORDER BY created_at DESC"
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(assets)
}
