//! Request and response types for issue endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::issues::db::{IssuePriority, IssueRecord, IssueStatus};

/// Create issue request
#[derive(Deserialize, Serialize, Debug)]
pub struct IssueCreate {
    /// Short summary line
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Severity; must be one of low/medium/high/critical
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Optional user to assign the issue to
    pub assignee_id: Option<i64>,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Partial update request; absent fields keep their current value
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Maintainers only
    pub status: Option<String>,
    pub priority: Option<String>,
    /// Maintainers only
    pub assignee_id: Option<i64>,
}

/// Query parameters for listing a project's issues
#[derive(Deserialize, Debug, Default)]
pub struct IssueListQuery {
    /// Case-insensitive text search over title and description
    pub q: Option<String>,
    /// Exact status filter
    pub status: Option<String>,
    /// Exact priority filter
    pub priority: Option<String>,
    /// Filter by assignee user ID
    pub assignee: Option<i64>,
    /// Sort order: priority, status, or updated_at
    pub sort: Option<String>,
}

/// Issue response with reporter and assignee names resolved
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssueResponse {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub priority: IssuePriority,
    pub reporter_id: i64,
    pub assignee_id: Option<i64>,
    pub reporter_name: String,
    pub assignee_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IssueRecord> for IssueResponse {
    fn from(issue: IssueRecord) -> Self {
        Self {
            id: issue.id,
            project_id: issue.project_id,
            title: issue.title,
            description: issue.description,
            status: issue.status,
            priority: issue.priority,
            reporter_id: issue.reporter_id,
            assignee_id: issue.assignee_id,
            reporter_name: issue.reporter_name,
            assignee_name: issue.assignee_name,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}
