//! HTTP handlers for comment endpoints
//!
//! # Endpoints
//!
//! - **`list_comments`** - GET /api/issues/{issue_id}/comments - thread, oldest first
//! - **`create_comment`** - POST /api/issues/{issue_id}/comments - add a comment
//!
//! Access is governed by membership in the parent issue's project. As with
//! issues, an unknown issue ID 404s before any membership check.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::permissions::require_membership;
use crate::backend::comments::db;
use crate::backend::comments::types::{CommentCreate, CommentResponse};
use crate::backend::error::ApiError;
use crate::backend::issues::db::get_issue;
use crate::backend::middleware::auth::CurrentUser;

/// List an issue's comments, oldest first
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(issue_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let issue = get_issue(&pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue not found"))?;
    require_membership(&pool, user.id, issue.project_id).await?;

    let comments = db::list_comments(&pool, issue_id).await?;
    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}

/// Add a comment to an issue
///
/// Members only. The caller becomes the author.
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(issue_id): Path<i64>,
    Json(request): Json<CommentCreate>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let issue = get_issue(&pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue not found"))?;
    require_membership(&pool, user.id, issue.project_id).await?;

    let comment = db::create_comment(&pool, issue_id, user.id, request.body).await?;

    tracing::info!(
        "Comment {} added to issue {} by user {}",
        comment.id,
        issue_id,
        user.id
    );
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            id: comment.id,
            issue_id: comment.issue_id,
            author_id: comment.author_id,
            author_name: user.name,
            body: comment.body,
            created_at: comment.created_at,
        }),
    ))
}
