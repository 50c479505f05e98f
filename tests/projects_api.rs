//! Projects API integration tests
//!
//! Covers project creation, key uniqueness, membership-scoped listing, and
//! the member management endpoint with its permission gates.

mod common;

use axum::http::StatusCode;
use common::{auth_header, create_test_user, spawn_server, TestUser};
use issuehub::backend::projects::db::{get_membership, MemberRole};
use serde_json::json;

async fn create_project_via_api(
    server: &axum_test::TestServer,
    owner: &TestUser,
    name: &str,
    key: &str,
) -> i64 {
    let response = server
        .post("/api/projects")
        .add_header("Authorization", auth_header(&owner.token))
        .json(&json!({ "name": name, "key": key }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_project_enrolls_creator_as_maintainer() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;

    let response = server
        .post("/api/projects")
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({
            "name": "IssueHub Development",
            "key": "ISSUE",
            "description": "Dogfooding"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "IssueHub Development");
    assert_eq!(body["key"], "ISSUE");
    assert_eq!(body["description"], "Dogfooding");
    let project_id = body["id"].as_i64().unwrap();

    let membership = get_membership(db.pool(), alice.id, project_id)
        .await
        .unwrap()
        .expect("creator should be enrolled");
    assert_eq!(membership.role, MemberRole::Maintainer);
}

#[tokio::test]
async fn test_create_project_duplicate_key() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;
    let bob = create_test_user(db.pool(), "Bob", "bob@example.com", "password123").await;
    create_project_via_api(&server, &alice, "First", "CORE").await;

    // Key uniqueness is global, not per user.
    let response = server
        .post("/api/projects")
        .add_header("Authorization", auth_header(&bob.token))
        .json(&json!({ "name": "Second", "key": "CORE" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "Project key already exists");
}

#[tokio::test]
async fn test_list_projects_scoped_to_membership() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;
    let bob = create_test_user(db.pool(), "Bob", "bob@example.com", "password123").await;
    create_project_via_api(&server, &alice, "Alpha", "ALPHA").await;
    create_project_via_api(&server, &bob, "Beta", "BETA").await;

    let response = server
        .get("/api/projects")
        .add_header("Authorization", auth_header(&alice.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["key"], "ALPHA");
}

#[tokio::test]
async fn test_add_member_success() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;
    let bob = create_test_user(db.pool(), "Bob", "bob@example.com", "password123").await;
    let project_id = create_project_via_api(&server, &alice, "Alpha", "ALPHA").await;

    let response = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "bob@example.com", "role": "maintainer" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_id"].as_i64().unwrap(), bob.id);
    assert_eq!(body["role"], "maintainer");
    assert_eq!(body["user_name"], "Bob");
    assert_eq!(body["user_email"], "bob@example.com");

    // Bob is now a maintainer and can enroll others himself.
    create_test_user(db.pool(), "Carol", "carol@example.com", "password123").await;
    let by_bob = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&bob.token))
        .json(&json!({ "email": "carol@example.com" }))
        .await;
    assert_eq!(by_bob.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_add_member_role_parsing() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;
    create_test_user(db.pool(), "Bob", "bob@example.com", "password123").await;
    create_test_user(db.pool(), "Carol", "carol@example.com", "password123").await;
    create_test_user(db.pool(), "Dave", "dave@example.com", "password123").await;
    let project_id = create_project_via_api(&server, &alice, "Alpha", "ALPHA").await;

    // Omitted role defaults to member.
    let defaulted = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "bob@example.com" }))
        .await;
    assert_eq!(defaulted.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = defaulted.json();
    assert_eq!(body["role"], "member");

    // Unknown role strings quietly become member as well.
    let unknown = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "carol@example.com", "role": "owner" }))
        .await;
    assert_eq!(unknown.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = unknown.json();
    assert_eq!(body["role"], "member");

    // Role matching is exact: a case variant of "maintainer" does not
    // grant the maintainer role.
    let shouted = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "dave@example.com", "role": "MAINTAINER" }))
        .await;
    assert_eq!(shouted.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = shouted.json();
    assert_eq!(body["role"], "member");
}

#[tokio::test]
async fn test_add_member_failure_modes() {
    let (server, db) = spawn_server().await;
    let alice = create_test_user(db.pool(), "Alice", "alice@example.com", "password123").await;
    let bob = create_test_user(db.pool(), "Bob", "bob@example.com", "password123").await;
    let eve = create_test_user(db.pool(), "Eve", "eve@example.com", "password123").await;
    let project_id = create_project_via_api(&server, &alice, "Alpha", "ALPHA").await;

    // Unknown email.
    let response = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "ghost@example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "User not found");

    // Already a member (the creator counts).
    let response = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "alice@example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "User is already a member");

    // Non-members cannot touch the roster at all.
    let response = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&eve.token))
        .json(&json!({ "email": "bob@example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["detail"], "You don't have access to this project");

    // Plain members cannot either.
    server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&alice.token))
        .json(&json!({ "email": "bob@example.com" }))
        .await;
    let response = server
        .post(&format!("/api/projects/{project_id}/members"))
        .add_header("Authorization", auth_header(&bob.token))
        .json(&json!({ "email": "eve@example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["detail"],
        "Only project maintainers can perform this action"
    );
}

#[tokio::test]
async fn test_projects_require_authentication() {
    let (server, _db) = spawn_server().await;

    let listing = server.get("/api/projects").await;
    assert_eq!(listing.status_code(), StatusCode::UNAUTHORIZED);

    let creation = server
        .post("/api/projects")
        .json(&json!({ "name": "Alpha", "key": "ALPHA" }))
        .await;
    assert_eq!(creation.status_code(), StatusCode::UNAUTHORIZED);
}
