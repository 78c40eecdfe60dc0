//! Bearer-token authentication against the sessions table.

use axum::http::HeaderMap;
use database::{session, Database};

use crate::error::{ApiError, Result};

/// Resolve the request's bearer token to a user id.
///
/// Missing header, malformed header, and unknown token all collapse to
/// `401 Unauthorized`; the response does not say which.
pub async fn authenticate(db: &Database, headers: &HeaderMap) -> Result<String> {
    let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;

    session::user_for_token(db.pool(), token)
        .await?
        .ok_or(ApiError::Unauthorized)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}
