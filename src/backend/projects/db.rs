//! Database operations for projects and memberships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Role of a user within a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum MemberRole {
    /// Regular member: can view, create issues, and comment
    Member,
    /// Maintainer: can additionally manage members, triage, and delete issues
    Maintainer,
}

impl Default for MemberRole {
    fn default() -> Self {
        MemberRole::Member
    }
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "member",
            MemberRole::Maintainer => "maintainer",
        }
    }

    /// Exact match only; callers treat anything unrecognised as `member`,
    /// so case variants never grant the maintainer role.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "member" => Some(MemberRole::Member),
            "maintainer" => Some(MemberRole::Maintainer),
            _ => None,
        }
    }
}

/// Project struct representing a project in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID
    pub id: i64,
    /// Human-readable project name
    pub name: String,
    /// Short unique key (e.g. "ISSUE")
    pub key: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Membership row linking a user to a project with a role
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectMember {
    /// Unique membership ID
    pub id: i64,
    /// Project the membership belongs to
    pub project_id: i64,
    /// Member's user ID
    pub user_id: i64,
    /// Member's role within the project
    pub role: MemberRole,
}

/// Create a project and enroll its creator as maintainer
///
/// Both inserts run in one transaction so a project can never exist without
/// its founding maintainer.
pub async fn create_project(
    pool: &SqlitePool,
    name: String,
    key: String,
    description: Option<String>,
    creator_id: i64,
) -> Result<Project, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let now = Utc::now();

    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (name, key, description, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, name, key, description, created_at",
    )
    .bind(name)
    .bind(key)
    .bind(description)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO project_members (project_id, user_id, role) VALUES (?, ?, ?)")
        .bind(project.id)
        .bind(creator_id)
        .bind(MemberRole::Maintainer)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(project)
}

/// Look up a project by its unique key
pub async fn get_project_by_key(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, name, key, description, created_at FROM projects WHERE key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await
}

/// List the projects a user belongs to
pub async fn list_projects_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT p.id, p.name, p.key, p.description, p.created_at \
         FROM projects p \
         JOIN project_members m ON m.project_id = p.id \
         WHERE m.user_id = ? \
         ORDER BY p.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Fetch a user's membership row for a project, if any
pub async fn get_membership(
    pool: &SqlitePool,
    user_id: i64,
    project_id: i64,
) -> Result<Option<ProjectMember>, sqlx::Error> {
    sqlx::query_as::<_, ProjectMember>(
        "SELECT id, project_id, user_id, role FROM project_members \
         WHERE user_id = ? AND project_id = ?",
    )
    .bind(user_id)
    .bind(project_id)
    .fetch_optional(pool)
    .await
}

/// Add a user to a project with the given role
pub async fn insert_member(
    pool: &SqlitePool,
    project_id: i64,
    user_id: i64,
    role: MemberRole,
) -> Result<ProjectMember, sqlx::Error> {
    sqlx::query_as::<_, ProjectMember>(
        "INSERT INTO project_members (project_id, user_id, role) \
         VALUES (?, ?, ?) \
         RETURNING id, project_id, user_id, role",
    )
    .bind(project_id)
    .bind(user_id)
    .bind(role)
    .fetch_one(pool)
    .await
}
