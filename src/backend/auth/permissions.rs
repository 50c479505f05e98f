/**
 * Permission Checks
 *
 * Project-scoped access control. Every project, issue, and comment
 * operation funnels through one of two gates:
 *
 * - [`require_membership`] - the caller must belong to the project
 * - [`require_maintainer`] - the caller must additionally hold the
 *   maintainer role
 *
 * Both return the membership row on success so handlers can branch on the
 * role without a second query. Absence of membership is deliberately
 * indistinguishable from the project not existing: both answer 403.
 */

use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::projects::db::{get_membership, MemberRole, ProjectMember};

/// Require that a user is a member of a project
///
/// Returns the membership row, or `Forbidden` when the user has no
/// membership (including when the project id does not exist).
pub async fn require_membership(
    pool: &SqlitePool,
    user_id: i64,
    project_id: i64,
) -> Result<ProjectMember, ApiError> {
    let membership = get_membership(pool, user_id, project_id).await?;
    membership.ok_or_else(|| ApiError::forbidden("You don't have access to this project"))
}

/// Require that a user is a maintainer of a project
///
/// Membership is checked first, so a non-member gets the membership error
/// rather than the role error.
pub async fn require_maintainer(
    pool: &SqlitePool,
    user_id: i64,
    project_id: i64,
) -> Result<ProjectMember, ApiError> {
    let membership = require_membership(pool, user_id, project_id).await?;
    if membership.role != MemberRole::Maintainer {
        return Err(ApiError::forbidden(
            "Only project maintainers can perform this action",
        ));
    }
    Ok(membership)
}
