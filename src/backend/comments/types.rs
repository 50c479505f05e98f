//! Request and response types for comment endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::comments::db::CommentRecord;

/// Create comment request
#[derive(Deserialize, Serialize, Debug)]
pub struct CommentCreate {
    /// Comment text
    pub body: String,
}

/// Comment response with the author's name resolved
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommentResponse {
    pub id: i64,
    pub issue_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentRecord> for CommentResponse {
    fn from(comment: CommentRecord) -> Self {
        Self {
            id: comment.id,
            issue_id: comment.issue_id,
            author_id: comment.author_id,
            author_name: comment.author_name,
            body: comment.body,
            created_at: comment.created_at,
        }
    }
}
