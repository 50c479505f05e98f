//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear the session cookie
//! - **`get_me`** - GET /api/auth/me - Get current user info
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email, and password → user created → 201 with profile
//! 2. **Login**: credentials verified → JWT returned in the body and set as a
//!    session cookie
//! 3. **Get Me**: token resolved by the auth middleware → profile returned
//! 4. **Logout**: cookie cleared; the token itself stays valid until expiry

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
