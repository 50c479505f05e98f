//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, From)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Unauthorized` - Token or login failures (401)
//! - `Forbidden` - Membership and role gate failures (403)
//! - `NotFound` - Missing resources (404)
//! - `Conflict` - Duplicate email, project key, or membership (400)
//! - `Validation` - Rejected enum values and malformed input (400)
//! - `Database` / `Internal` - Server-side failures (500, generic body)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing it to be returned
//! directly from handlers. The error is converted to the appropriate HTTP
//! status code and a `{"detail": ...}` JSON body. Server-side failures are
//! logged and reduced to a generic message so internal details never reach
//! the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
