//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management. It provides HTTP handlers for authentication endpoints and
//! manages user data, password hashing, JWT tokens, and permission checks.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - Password hashing with scheme selection and migration
//! - **`sessions`** - JWT token issuance and validation
//! - **`permissions`** - Project membership and maintainer gates
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing service
//! ├── sessions.rs     - JWT token management
//! ├── permissions.rs  - Membership and role checks
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     ├── logout.rs   - Session cookie removal handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: User provides name, email, and password → User created → 201
//! 2. **Login**: Credentials verified → JWT issued → token body + session cookie
//! 3. **Authenticated requests**: Bearer header or cookie → token validated →
//!    user loaded and attached to the request
//! 4. **Logout**: Session cookie cleared (tokens are stateless and stay valid
//!    until they expire)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt; legacy pbkdf2-sha256 hashes still
//!   verify and are transparently upgraded on login
//! - JWT tokens are HS256-signed and carry only the user id and timestamps
//! - Login failures return 401 with a single message for both unknown email
//!   and wrong password (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing service
pub mod password;

/// JWT token issuance and validation
pub mod sessions;

/// Project membership and maintainer gates
pub mod permissions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, SignupRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, logout, signup};
pub use password::{HashScheme, PasswordService};
pub use sessions::TokenService;
