//! Permission gate tests
//!
//! Exercises `require_membership` and `require_maintainer` directly against
//! a real database, including the error variants and status codes they map
//! to. The HTTP-level behavior of these gates is covered by the API tests.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{create_test_user, TestDatabase};
use issuehub::backend::auth::permissions::{require_maintainer, require_membership};
use issuehub::backend::error::ApiError;
use issuehub::backend::projects::db::{create_project, insert_member, MemberRole};

struct GateFixture {
    maintainer_id: i64,
    member_id: i64,
    outsider_id: i64,
    project_id: i64,
}

async fn setup(db: &TestDatabase) -> GateFixture {
    let maintainer = create_test_user(db.pool(), "Maya", "maya@example.com", "password123").await;
    let member = create_test_user(db.pool(), "Milo", "milo@example.com", "password123").await;
    let outsider = create_test_user(db.pool(), "Otto", "otto@example.com", "password123").await;

    let project = create_project(
        db.pool(),
        "Tracker".to_string(),
        "TRACK".to_string(),
        None,
        maintainer.id,
    )
    .await
    .unwrap();
    insert_member(db.pool(), project.id, member.id, MemberRole::Member)
        .await
        .unwrap();

    GateFixture {
        maintainer_id: maintainer.id,
        member_id: member.id,
        outsider_id: outsider.id,
        project_id: project.id,
    }
}

#[tokio::test]
async fn test_require_membership_returns_the_row() {
    let db = TestDatabase::new().await;
    let fx = setup(&db).await;

    let membership = require_membership(db.pool(), fx.member_id, fx.project_id)
        .await
        .unwrap();
    assert_eq!(membership.user_id, fx.member_id);
    assert_eq!(membership.project_id, fx.project_id);
    assert_eq!(membership.role, MemberRole::Member);
}

#[tokio::test]
async fn test_require_membership_rejects_outsiders() {
    let db = TestDatabase::new().await;
    let fx = setup(&db).await;

    let err = require_membership(db.pool(), fx.outsider_id, fx.project_id)
        .await
        .unwrap_err();
    assert_matches!(&err, ApiError::Forbidden(message) => {
        assert_eq!(message, "You don't have access to this project");
    });
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_project_is_indistinguishable_from_no_access() {
    let db = TestDatabase::new().await;
    let fx = setup(&db).await;

    let real = require_membership(db.pool(), fx.outsider_id, fx.project_id)
        .await
        .unwrap_err();
    let ghost = require_membership(db.pool(), fx.outsider_id, 999_999)
        .await
        .unwrap_err();
    assert_eq!(real.detail(), ghost.detail());
    assert_eq!(real.status_code(), ghost.status_code());
}

#[tokio::test]
async fn test_require_maintainer_role_gate() {
    let db = TestDatabase::new().await;
    let fx = setup(&db).await;

    let membership = require_maintainer(db.pool(), fx.maintainer_id, fx.project_id)
        .await
        .unwrap();
    assert_eq!(membership.role, MemberRole::Maintainer);

    let err = require_maintainer(db.pool(), fx.member_id, fx.project_id)
        .await
        .unwrap_err();
    assert_matches!(&err, ApiError::Forbidden(message) => {
        assert_eq!(message, "Only project maintainers can perform this action");
    });

    // Non-members hit the membership error, not the role error.
    let err = require_maintainer(db.pool(), fx.outsider_id, fx.project_id)
        .await
        .unwrap_err();
    assert_matches!(&err, ApiError::Forbidden(message) => {
        assert_eq!(message, "You don't have access to this project");
    });
}
