//! Request and response types for project endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::projects::db::{MemberRole, Project};

/// Create project request
#[derive(Deserialize, Serialize, Debug)]
pub struct ProjectCreate {
    /// Human-readable project name
    pub name: String,
    /// Short unique key (e.g. "ISSUE")
    pub key: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Project response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            key: project.key,
            description: project.description,
            created_at: project.created_at,
        }
    }
}

/// Add member request
#[derive(Deserialize, Serialize, Debug)]
pub struct AddMemberRequest {
    /// Email of the user to enroll
    pub email: String,
    /// Requested role; anything other than "maintainer" becomes member
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "member".to_string()
}

/// Membership response, flattened with the member's identity
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemberResponse {
    /// Membership row ID
    pub id: i64,
    /// Member's user ID
    pub user_id: i64,
    /// Member's role within the project
    pub role: MemberRole,
    /// Member's display name
    pub user_name: String,
    /// Member's email address
    pub user_email: String,
}
