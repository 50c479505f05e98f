//! Issues Module
//!
//! This module handles the issues inside a project: creation, filtered
//! listing, detail, partial update, and deletion. Status and assignee
//! changes are reserved for maintainers; deletion is maintainer-only.

pub mod db;
pub mod handlers;
pub mod types;

pub use db::{IssuePriority, IssueRecord, IssueStatus, NewIssue};
pub use handlers::{create_issue, delete_issue, get_issue, list_issues, update_issue};
pub use types::{IssueCreate, IssueListQuery, IssueResponse, IssueUpdate};
