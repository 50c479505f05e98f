//! Projects Module
//!
//! This module handles projects and project membership. Every issue and
//! comment lives inside a project; membership rows are the basis for all
//! permission checks.

pub mod db;
pub mod handlers;
pub mod types;

pub use db::{MemberRole, Project, ProjectMember};
pub use handlers::{add_member, create_project, list_projects};
pub use types::{AddMemberRequest, MemberResponse, ProjectCreate, ProjectResponse};
