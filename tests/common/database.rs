//! Database test fixtures
//!
//! Each test gets its own in-memory SQLite database with the full schema
//! applied. The pool is capped at one connection: SQLite gives every
//! connection to `:memory:` a separate database, so a second connection
//! would see empty tables.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Fresh in-memory database with migrations applied
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("in-memory connection string")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to open in-memory test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
