//! Comments Module
//!
//! Comments hang off issues as a flat, chronological discussion thread.
//! Any project member can read and write them; visibility follows the
//! parent issue's project membership.

pub mod db;
pub mod handlers;
pub mod types;

pub use db::{Comment, CommentRecord};
pub use handlers::{create_comment, list_comments};
pub use types::{CommentCreate, CommentResponse};
