//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, top-level routes, and middleware
//! - **`api_routes`** - API endpoint wiring (public and protected)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware stack
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! ## Public Routes
//!
//! - `GET /` - API welcome message
//! - `GET /health` - Health check
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - Clear the session cookie
//!
//! ## Protected Routes (session token required)
//!
//! - `GET /api/auth/me` - Current user info
//! - `POST /api/projects`, `GET /api/projects` - Projects
//! - `POST /api/projects/{project_id}/members` - Membership
//! - `GET|POST /api/projects/{project_id}/issues` - Issues in a project
//! - `GET|PATCH|DELETE /api/issues/{issue_id}` - Single issue
//! - `GET|POST /api/issues/{issue_id}/comments` - Comments
//!
//! Anything else falls through to a JSON 404.

/// API endpoint wiring
pub mod api_routes;

/// Main router creation
pub mod router;

pub use router::create_router;
