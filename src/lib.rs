//! IssueHub - Main Library
//!
//! IssueHub is a lightweight issue tracker backend built with Rust. It exposes
//! a JSON HTTP API for user accounts, projects with role-based membership,
//! issues, and comment threads.
//!
//! # Overview
//!
//! This library provides the core functionality for IssueHub, including:
//! - Signup/login with bcrypt credential hashing and legacy hash migration
//! - Stateless JWT sessions delivered via bearer header or cookie
//! - Projects with member/maintainer roles and permission gates
//! - Issue tracking with filtered, sorted listings and comment threads
//! - SQLite persistence via sqlx with embedded migrations
//!
//! # Module Structure
//!
//! The library is organized around a single `backend` module:
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, route configuration, middleware
//!   - Authentication (password hashing, JWT sessions, permission checks)
//!   - Project, issue, and comment storage and handlers
//!   - Error types with HTTP response conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use issuehub::backend::server::config::Settings;
//! use issuehub::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let settings = Settings::from_env();
//! let app = create_app(&settings).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
