//! Session token lookups backing bearer auth.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Session;

/// Create a session token for a user.
pub async fn create_session(pool: &SqlitePool, token: &str, user_id: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO sessions (token, user_id)
        VALUES (?, ?)
        "#,
    )
    .bind(token)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Session",
                    id: token.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Resolve a bearer token to a user ID. Returns `None` for unknown tokens.
pub async fn user_for_token(pool: &SqlitePool, token: &str) -> Result<Option<String>> {
    let session =
        sqlx::query_as::<_, Session>("SELECT token, user_id, created_at FROM sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(pool)
            .await?;

    Ok(session.map(|s| s.user_id))
}

/// Delete a session token (logout).
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE token = ?
        "#,
    )
    .bind(token)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Session",
            id: token.to_string(),
        });
    }

    Ok(())
}
