//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//! Middleware runs before requests reach handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Authentication middleware and the `CurrentUser` extractor

pub mod auth;

pub use auth::{auth_middleware, bearer_token, CurrentUser};
