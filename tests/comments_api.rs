//! Comments API integration tests
//!
//! Covers the comment thread endpoints and their visibility rules.

mod common;

use axum::http::StatusCode;
use common::{auth_header, create_test_user, spawn_server, TestDatabase, TestUser};
use issuehub::backend::issues::db::{create_issue, IssuePriority, IssueStatus, NewIssue};
use issuehub::backend::projects::db::{create_project, insert_member, MemberRole};
use serde_json::json;

struct CommentFixture {
    maintainer: TestUser,
    member: TestUser,
    outsider: TestUser,
    issue_id: i64,
}

async fn setup(db: &TestDatabase) -> CommentFixture {
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

    let issue = create_issue(
        db.pool(),
        NewIssue {
            project_id: project.id,
            title: "Crash on login".to_string(),
            description: None,
            status: IssueStatus::Open,
            priority: IssuePriority::Medium,
            reporter_id: member.id,
            assignee_id: None,
        },
    )
    .await
    .unwrap();

    CommentFixture {
        maintainer,
        member,
        outsider,
        issue_id: issue.id,
    }
}

#[tokio::test]
async fn test_comment_thread_flow() {
    let (server, db) = spawn_server().await;
    let fx = setup(&db).await;

    let first = server
        .post(&format!("/api/issues/{}/comments", fx.issue_id))
        .add_header("Authorization", auth_header(&fx.member.token))
        .json(&json!({ "body": "Still happening on main." }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = first.json();
    assert_eq!(body["author_id"].as_i64().unwrap(), fx.member.id);
    assert_eq!(body["author_name"], "Milo");
    assert_eq!(body["issue_id"].as_i64().unwrap(), fx.issue_id);
    assert_eq!(body["body"], "Still happening on main.");

    let second = server
        .post(&format!("/api/issues/{}/comments", fx.issue_id))
        .add_header("Authorization", auth_header(&fx.maintainer.token))
        .json(&json!({ "body": "Taking a look now." }))
        .await;
    assert_eq!(second.status_code(), StatusCode::CREATED);

    // Oldest first, each with its author's name resolved.
    let listing = server
        .get(&format!("/api/issues/{}/comments", fx.issue_id))
        .add_header("Authorization", auth_header(&fx.member.token))
        .await;
    assert_eq!(listing.status_code(), StatusCode::OK);
    let body: serde_json::Value = listing.json();
    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["body"], "Still happening on main.");
    assert_eq!(comments[0]["author_name"], "Milo");
    assert_eq!(comments[1]["body"], "Taking a look now.");
    assert_eq!(comments[1]["author_name"], "Maya");
}

#[tokio::test]
async fn test_comments_on_unknown_issue() {
    let (server, db) = spawn_server().await;
    let fx = setup(&db).await;

    let listing = server
        .get("/api/issues/999999/comments")
        .add_header("Authorization", auth_header(&fx.member.token))
        .await;
    assert_eq!(listing.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = listing.json();
    assert_eq!(body["detail"], "Issue not found");

    let creation = server
        .post("/api/issues/999999/comments")
        .add_header("Authorization", auth_header(&fx.member.token))
        .json(&json!({ "body": "Into the void." }))
        .await;
    assert_eq!(creation.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comments_membership_gates() {
    let (server, db) = spawn_server().await;
    let fx = setup(&db).await;

    let listing = server
        .get(&format!("/api/issues/{}/comments", fx.issue_id))
        .add_header("Authorization", auth_header(&fx.outsider.token))
        .await;
    assert_eq!(listing.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = listing.json();
    assert_eq!(body["detail"], "You don't have access to this project");

    let creation = server
        .post(&format!("/api/issues/{}/comments", fx.issue_id))
        .add_header("Authorization", auth_header(&fx.outsider.token))
        .json(&json!({ "body": "Drive-by remark." }))
        .await;
    assert_eq!(creation.status_code(), StatusCode::FORBIDDEN);

    let unauthenticated = server
        .get(&format!("/api/issues/{}/comments", fx.issue_id))
        .await;
    assert_eq!(unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
}
