//! Backend Module
//!
//! This module contains all server-side code for the IssueHub application.
//! It provides a complete Axum HTTP server with JWT authentication, project
//! membership enforcement, and SQLite persistence.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Signup, login, logout, and current-user endpoints
//! - Project, issue, and comment CRUD with permission gates
//! - Route configuration and authentication middleware
//! - Database persistence (SQLite via sqlx)
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization, state, configuration
//! ├── routes/         - Route configuration
//! ├── auth/           - Passwords, sessions, users, permissions
//! ├── projects/       - Projects and memberships
//! ├── issues/         - Issue tracking
//! ├── comments/       - Issue comment threads
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - The SQLite connection pool
//! - The token service (JWT issuance and validation)
//! - The password service (hashing scheme selection and verification)
//! - Runtime settings loaded from the environment
//!
//! State is cheap to clone: the pool and services are reference-counted and
//! shared across all request handlers.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>`. The `ApiError` type maps onto HTTP
//! status codes and a `{"detail": ...}` JSON body in `error::conversion`, so
//! handlers propagate failures with the `?` operator and never build error
//! responses by hand.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication, sessions, and permissions
pub mod auth;

/// Projects and memberships
pub mod projects;

/// Issue tracking
pub mod issues;

/// Issue comment threads
pub mod comments;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
pub use server::state::AppState;
