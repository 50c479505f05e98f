//! HTTP handlers for project endpoints
//!
//! # Endpoints
//!
//! - **`create_project`** - POST /api/projects - create a project; the
//!   creator becomes its first maintainer
//! - **`list_projects`** - GET /api/projects - projects the caller belongs to
//! - **`add_member`** - POST /api/projects/{project_id}/members - enroll a
//!   user (maintainers only)
//!
//! All endpoints require authentication; the membership rules are enforced
//! per handler via the permission gates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::permissions::require_maintainer;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::CurrentUser;
use crate::backend::projects::db::{
    create_project as insert_project, get_membership, get_project_by_key, insert_member,
    list_projects_for_user, MemberRole,
};
use crate::backend::projects::types::{
    AddMemberRequest, MemberResponse, ProjectCreate, ProjectResponse,
};

/// Create a new project
///
/// Any authenticated user can create a project. The creator is enrolled as
/// maintainer in the same transaction.
///
/// # Errors
///
/// * `400 Bad Request` - the project key is already taken
pub async fn create_project(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<ProjectCreate>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    if get_project_by_key(&pool, &request.key).await?.is_some() {
        return Err(ApiError::conflict("Project key already exists"));
    }

    let project = insert_project(
        &pool,
        request.name,
        request.key,
        request.description,
        user.id,
    )
    .await?;

    tracing::info!(
        "Project created: {} ({}) by user {}",
        project.id,
        project.key,
        user.id
    );
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// List the caller's projects
///
/// Only projects the caller is a member of are returned.
pub async fn list_projects(
    State(pool): State<SqlitePool>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = list_projects_for_user(&pool, user.id).await?;
    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// Add a member to a project
///
/// Maintainers only. The target user is looked up by email; an unknown role
/// string silently becomes `member`.
///
/// # Errors
///
/// * `403 Forbidden` - caller is not a member, or not a maintainer
/// * `404 Not Found` - no account with the given email
/// * `400 Bad Request` - the user is already a member
pub async fn add_member(
    State(pool): State<SqlitePool>,
    CurrentUser(current): CurrentUser,
    Path(project_id): Path<i64>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    require_maintainer(&pool, current.id, project_id).await?;

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if get_membership(&pool, user.id, project_id).await?.is_some() {
        return Err(ApiError::conflict("User is already a member"));
    }

    let role = MemberRole::from_str(&request.role).unwrap_or(MemberRole::Member);
    let member = insert_member(&pool, project_id, user.id, role).await?;

    tracing::info!(
        "User {} added to project {} as {} by user {}",
        user.id,
        project_id,
        member.role.as_str(),
        current.id
    );
    Ok((
        StatusCode::CREATED,
        Json(MemberResponse {
            id: member.id,
            user_id: user.id,
            role: member.role,
            user_name: user.name,
            user_email: user.email,
        }),
    ))
}
