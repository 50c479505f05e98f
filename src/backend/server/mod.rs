//! Server Module
//!
//! This module contains the server-side plumbing for initializing and
//! configuring the Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`config`** - Settings loaded from the environment, database setup
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Settings and database pool creation
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Settings**: read from environment variables with local-dev defaults
//! 2. **Database**: open the SQLite pool and run migrations
//! 3. **State**: build `AppState` (pool, token service, password service)
//! 4. **Router**: configure all routes and middleware

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

pub use config::{load_database, Settings};
pub use init::create_app;
pub use state::AppState;
