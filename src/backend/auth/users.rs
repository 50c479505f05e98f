/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt, or legacy pbkdf2-sha256)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password_hash, created_at) \
         VALUES (?, ?, ?, ?) \
         RETURNING id, name, email, password_hash, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up a user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by ID
pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Replace a user's stored credential
///
/// Used by the login flow to upgrade legacy hashes to the preferred scheme.
pub async fn update_password_hash(
    pool: &SqlitePool,
    user_id: i64,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
        .bind(password_hash)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
