//! Generated-image CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Image;

const COLUMNS: &str = "id, project_id, prompt, image_url, created_at";

/// Record a generated image for a project.
pub async fn create_image(pool: &SqlitePool, image: &Image) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO images (id, project_id, prompt, image_url)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&image.id)
    .bind(&image.project_id)
    .bind(&image.prompt)
    .bind(&image.image_url)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get an image by ID.
pub async fn get_image(pool: &SqlitePool, id: &str) -> Result<Image> {
    sqlx::query_as::<_, Image>(&format!("SELECT {COLUMNS} FROM images WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Image",
            id: id.to_string(),
        })
}

/// List all images for a project, newest first.
pub async fn list_images_for_project(pool: &SqlitePool, project_id: &str) -> Result<Vec<Image>> {
    let images = sqlx::query_as::<_, Image>(&format!(
        "SELECT {COLUMNS} FROM images WHERE project_id = ? ORDER BY created_at DESC"
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

/// Delete an image by ID.
pub async fn delete_image(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM images
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Image",
            id: id.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project;
    use crate::test_support::{sample_project, test_db};

    fn sample_image(project_id: &str) -> Image {
        Image {
            id: uuid::Uuid::new_v4().to_string(),
            project_id: project_id.to_string(),
            prompt: "founder portrait, studio lighting".to_string(),
            image_url: "https://images.test/1.png".to_string(),
            created_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let db = test_db().await;
        let proj = sample_project("user-1");
        project::create_project(db.pool(), &proj).await.unwrap();

        let image = sample_image(&proj.id);
        create_image(db.pool(), &image).await.unwrap();

        let fetched = get_image(db.pool(), &image.id).await.unwrap();
        assert_eq!(fetched.prompt, image.prompt);
        assert_eq!(fetched.image_url, image.image_url);

        delete_image(db.pool(), &image.id).await.unwrap();
        let gone = get_image(db.pool(), &image.id).await;
        assert!(matches!(gone, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_scoped_to_project() {
        let db = test_db().await;
        let proj_a = sample_project("user-1");
        let mut proj_b = sample_project("user-1");
        proj_b.id = uuid::Uuid::new_v4().to_string();
        proj_b.source_url = "https://other.example.com".to_string();
        project::create_project(db.pool(), &proj_a).await.unwrap();
        project::create_project(db.pool(), &proj_b).await.unwrap();

        create_image(db.pool(), &sample_image(&proj_a.id))
            .await
            .unwrap();
        create_image(db.pool(), &sample_image(&proj_a.id))
            .await
            .unwrap();
        create_image(db.pool(), &sample_image(&proj_b.id))
            .await
            .unwrap();

        let images = list_images_for_project(db.pool(), &proj_a.id).await.unwrap();
        assert_eq!(images.len(), 2);
    }
}
