//! Database operations for issues

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::backend::issues::types::IssueListQuery;

/// Workflow state of an issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum IssueStatus {
    /// Newly reported, not yet picked up
    Open,
    /// Someone is actively working on it
    InProgress,
    /// Fixed, awaiting confirmation
    Resolved,
    /// Done, no further work expected
    Closed,
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Open
    }
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Closed => "closed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(IssueStatus::Open),
            "in_progress" => Some(IssueStatus::InProgress),
            "resolved" => Some(IssueStatus::Resolved),
            "closed" => Some(IssueStatus::Closed),
            _ => None,
        }
    }
}

/// Severity of an issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum IssuePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for IssuePriority {
    fn default() -> Self {
        IssuePriority::Medium
    }
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::Low => "low",
            IssuePriority::Medium => "medium",
            IssuePriority::High => "high",
            IssuePriority::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(IssuePriority::Low),
            "medium" => Some(IssuePriority::Medium),
            "high" => Some(IssuePriority::High),
            "critical" => Some(IssuePriority::Critical),
            _ => None,
        }
    }
}

/// Issue row joined with the reporter's and assignee's display names
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct IssueRecord {
    /// Unique issue ID
    pub id: i64,
    /// Project the issue belongs to
    pub project_id: i64,
    /// Short summary line
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Workflow state
    pub status: IssueStatus,
    /// Severity
    pub priority: IssuePriority,
    /// User who reported the issue
    pub reporter_id: i64,
    /// User the issue is assigned to, if any
    pub assignee_id: Option<i64>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Last modified timestamp
    pub updated_at: DateTime<Utc>,
    /// Reporter's display name
    pub reporter_name: String,
    /// Assignee's display name, if assigned
    pub assignee_name: Option<String>,
}

/// Field set for inserting an issue
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub reporter_id: i64,
    pub assignee_id: Option<i64>,
}

const ISSUE_COLUMNS: &str = "i.id, i.project_id, i.title, i.description, i.status, i.priority, \
     i.reporter_id, i.assignee_id, i.created_at, i.updated_at, \
     r.name AS reporter_name, a.name AS assignee_name";

const ISSUE_JOINS: &str = "FROM issues i \
     JOIN users r ON r.id = i.reporter_id \
     LEFT JOIN users a ON a.id = i.assignee_id";

/// Insert an issue and return it with names resolved
pub async fn create_issue(pool: &SqlitePool, new: NewIssue) -> Result<IssueRecord, sqlx::Error> {
    let now = Utc::now();
    let issue_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO issues \
         (project_id, title, description, status, priority, reporter_id, assignee_id, \
          created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         RETURNING id",
    )
    .bind(new.project_id)
    .bind(new.title)
    .bind(new.description)
    .bind(new.status)
    .bind(new.priority)
    .bind(new.reporter_id)
    .bind(new.assignee_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    get_issue(pool, issue_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Fetch a single issue by ID, with reporter and assignee names
pub async fn get_issue(
    pool: &SqlitePool,
    issue_id: i64,
) -> Result<Option<IssueRecord>, sqlx::Error> {
    sqlx::query_as::<_, IssueRecord>(&format!(
        "SELECT {ISSUE_COLUMNS} {ISSUE_JOINS} WHERE i.id = ?"
    ))
    .bind(issue_id)
    .fetch_optional(pool)
    .await
}

/// List a project's issues with optional filtering and sorting
///
/// Text search is case-insensitive over title and description. Unknown
/// status or priority values simply match no rows; empty filter strings
/// are ignored like absent ones. Sort options: `priority` (most severe
/// first), `status`, `updated_at` (newest first); anything else falls
/// back to newest created first.
pub async fn list_issues(
    pool: &SqlitePool,
    project_id: i64,
    filter: &IssueListQuery,
) -> Result<Vec<IssueRecord>, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {ISSUE_COLUMNS} {ISSUE_JOINS} WHERE i.project_id = "
    ));
    builder.push_bind(project_id);

    if let Some(q) = filter.q.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", q.to_lowercase());
        builder.push(" AND (LOWER(i.title) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR LOWER(i.description) LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
        builder.push(" AND i.status = ");
        builder.push_bind(status.to_string());
    }
    if let Some(priority) = filter.priority.as_deref().filter(|s| !s.is_empty()) {
        builder.push(" AND i.priority = ");
        builder.push_bind(priority.to_string());
    }
    if let Some(assignee) = filter.assignee {
        builder.push(" AND i.assignee_id = ");
        builder.push_bind(assignee);
    }

    match filter.sort.as_deref() {
        Some("priority") => {
            builder.push(
                " ORDER BY CASE i.priority \
                 WHEN 'critical' THEN 0 WHEN 'high' THEN 1 WHEN 'medium' THEN 2 \
                 ELSE 3 END, i.id",
            );
        }
        Some("status") => {
            builder.push(" ORDER BY i.status, i.id");
        }
        Some("updated_at") => {
            builder.push(" ORDER BY i.updated_at DESC, i.id DESC");
        }
        _ => {
            builder.push(" ORDER BY i.created_at DESC, i.id DESC");
        }
    }

    builder
        .build_query_as::<IssueRecord>()
        .fetch_all(pool)
        .await
}

/// Overwrite an issue's mutable fields and bump `updated_at`
pub async fn update_issue(
    pool: &SqlitePool,
    issue_id: i64,
    title: String,
    description: Option<String>,
    status: IssueStatus,
    priority: IssuePriority,
    assignee_id: Option<i64>,
) -> Result<IssueRecord, sqlx::Error> {
    sqlx::query(
        "UPDATE issues \
         SET title = ?, description = ?, status = ?, priority = ?, assignee_id = ?, \
             updated_at = ? \
         WHERE id = ?",
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(priority)
    .bind(assignee_id)
    .bind(Utc::now())
    .bind(issue_id)
    .execute(pool)
    .await?;

    get_issue(pool, issue_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Delete an issue; its comments go with it
pub async fn delete_issue(pool: &SqlitePool, issue_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM issues WHERE id = ?")
        .bind(issue_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(IssueStatus::from_str("open"), Some(IssueStatus::Open));
        assert_eq!(
            IssueStatus::from_str("in_progress"),
            Some(IssueStatus::InProgress)
        );
        assert_eq!(IssueStatus::from_str("RESOLVED"), Some(IssueStatus::Resolved));
        assert_eq!(IssueStatus::from_str("done"), None);
        assert_eq!(IssueStatus::from_str(""), None);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(IssuePriority::from_str("low"), Some(IssuePriority::Low));
        assert_eq!(
            IssuePriority::from_str("Critical"),
            Some(IssuePriority::Critical)
        );
        assert_eq!(IssuePriority::from_str("urgent"), None);
    }

    #[test]
    fn test_round_trips() {
        for status in [
            IssueStatus::Open,
            IssueStatus::InProgress,
            IssueStatus::Resolved,
            IssueStatus::Closed,
        ] {
            assert_eq!(IssueStatus::from_str(status.as_str()), Some(status));
        }
        for priority in [
            IssuePriority::Low,
            IssuePriority::Medium,
            IssuePriority::High,
            IssuePriority::Critical,
        ] {
            assert_eq!(IssuePriority::from_str(priority.as_str()), Some(priority));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(IssueStatus::default(), IssueStatus::Open);
        assert_eq!(IssuePriority::default(), IssuePriority::Medium);
    }
}
