//! Database operations for comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Comment row as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID
    pub id: i64,
    /// Issue the comment belongs to
    pub issue_id: i64,
    /// User who wrote the comment
    pub author_id: i64,
    /// Comment text
    pub body: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with the author's display name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: i64,
    pub issue_id: i64,
    pub author_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    /// Author's display name
    pub author_name: String,
}

/// List an issue's comments, oldest first
pub async fn list_comments(
    pool: &SqlitePool,
    issue_id: i64,
) -> Result<Vec<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(
        "SELECT c.id, c.issue_id, c.author_id, c.body, c.created_at, \
         u.name AS author_name \
         FROM comments c \
         JOIN users u ON u.id = c.author_id \
         WHERE c.issue_id = ? \
         ORDER BY c.created_at, c.id",
    )
    .bind(issue_id)
    .fetch_all(pool)
    .await
}

/// Insert a comment on an issue
pub async fn create_comment(
    pool: &SqlitePool,
    issue_id: i64,
    author_id: i64,
    body: String,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (issue_id, author_id, body, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, issue_id, author_id, body, created_at",
    )
    .bind(issue_id)
    .bind(author_id)
    .bind(body)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}
