//! HTTP handlers for issue endpoints
//!
//! # Endpoints
//!
//! - **`list_issues`** - GET /api/projects/{project_id}/issues - filtered list
//! - **`create_issue`** - POST /api/projects/{project_id}/issues - report an issue
//! - **`get_issue`** - GET /api/issues/{issue_id} - issue detail
//! - **`update_issue`** - PATCH /api/issues/{issue_id} - partial update
//! - **`delete_issue`** - DELETE /api/issues/{issue_id} - maintainers only
//!
//! Every handler resolves the issue's project and checks the caller's
//! membership before touching anything. Issue lookups 404 before the
//! membership check so non-members cannot probe which IDs exist.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::permissions::{require_maintainer, require_membership};
use crate::backend::error::ApiError;
use crate::backend::issues::db::{self, IssuePriority, IssueStatus, NewIssue};
use crate::backend::issues::types::{IssueCreate, IssueListQuery, IssueResponse, IssueUpdate};
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::projects::db::MemberRole;

/// List a project's issues
///
/// Members only. Supports text search (`q`), exact `status` / `priority` /
/// `assignee` filters, and a `sort` parameter.
pub async fn list_issues(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
    Query(filter): Query<IssueListQuery>,
) -> Result<Json<Vec<IssueResponse>>, ApiError> {
    require_membership(&pool, user.id, project_id).await?;

    let issues = db::list_issues(&pool, project_id, &filter).await?;
    Ok(Json(issues.into_iter().map(IssueResponse::from).collect()))
}

/// Report a new issue
///
/// Members only. The caller becomes the reporter; new issues start out open.
///
/// # Errors
///
/// * `403 Forbidden` - caller is not a member of the project
/// * `400 Bad Request` - unknown priority value
pub async fn create_issue(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
    Json(request): Json<IssueCreate>,
) -> Result<(StatusCode, Json<IssueResponse>), ApiError> {
    require_membership(&pool, user.id, project_id).await?;

    let priority = IssuePriority::from_str(&request.priority)
        .ok_or_else(|| ApiError::validation("Invalid priority value"))?;

    let issue = db::create_issue(
        &pool,
        NewIssue {
            project_id,
            title: request.title,
            description: request.description,
            status: IssueStatus::default(),
            priority,
            reporter_id: user.id,
            assignee_id: request.assignee_id,
        },
    )
    .await?;

    tracing::info!(
        "Issue created: {} in project {} by user {}",
        issue.id,
        project_id,
        user.id
    );
    Ok((StatusCode::CREATED, Json(IssueResponse::from(issue))))
}

/// Fetch a single issue
pub async fn get_issue(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(issue_id): Path<i64>,
) -> Result<Json<IssueResponse>, ApiError> {
    let issue = db::get_issue(&pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue not found"))?;
    require_membership(&pool, user.id, issue.project_id).await?;

    Ok(Json(IssueResponse::from(issue)))
}

/// Partially update an issue
///
/// Absent fields keep their current value, and empty strings count as
/// absent for `title`, `status`, and `priority`. Changing `status` or
/// `assignee_id` requires the maintainer role; the other fields are open
/// to any member.
///
/// # Errors
///
/// * `404 Not Found` - no such issue
/// * `403 Forbidden` - not a member, or member touching maintainer fields
/// * `400 Bad Request` - unknown status or priority value
pub async fn update_issue(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(issue_id): Path<i64>,
    Json(request): Json<IssueUpdate>,
) -> Result<Json<IssueResponse>, ApiError> {
    let issue = db::get_issue(&pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue not found"))?;
    let member = require_membership(&pool, user.id, issue.project_id).await?;

    // An empty-string field behaves exactly like an omitted one, for the
    // gate as well as the merge.
    let status_patch = request.status.as_deref().filter(|s| !s.is_empty());
    let priority_patch = request.priority.as_deref().filter(|s| !s.is_empty());

    if (status_patch.is_some() || request.assignee_id.is_some())
        && member.role != MemberRole::Maintainer
    {
        return Err(ApiError::forbidden(
            "Only maintainers can change status and assignee",
        ));
    }

    let status = match status_patch {
        Some(value) => IssueStatus::from_str(value)
            .ok_or_else(|| ApiError::validation("Invalid status value"))?,
        None => issue.status,
    };
    let priority = match priority_patch {
        Some(value) => IssuePriority::from_str(value)
            .ok_or_else(|| ApiError::validation("Invalid priority value"))?,
        None => issue.priority,
    };
    let title = request
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or(issue.title);
    let description = request.description.or(issue.description);
    let assignee_id = request.assignee_id.or(issue.assignee_id);

    let updated =
        db::update_issue(&pool, issue_id, title, description, status, priority, assignee_id)
            .await?;

    tracing::info!("Issue {} updated by user {}", issue_id, user.id);
    Ok(Json(IssueResponse::from(updated)))
}

/// Delete an issue
///
/// Maintainers only. Comments on the issue are removed with it.
pub async fn delete_issue(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Path(issue_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let issue = db::get_issue(&pool, issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Issue not found"))?;
    require_maintainer(&pool, user.id, issue.project_id).await?;

    db::delete_issue(&pool, issue_id).await?;

    tracing::info!("Issue {} deleted by user {}", issue_id, user.id);
    Ok(StatusCode::NO_CONTENT)
}
