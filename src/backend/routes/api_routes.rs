/**
 * API Route Wiring
 *
 * This module attaches the API endpoints to the router, split into a
 * public table and a protected table. The protected table sits behind the
 * authentication middleware; its handlers can rely on `CurrentUser` being
 * present.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login, sets the session cookie
 * - `POST /api/auth/logout` - Clears the session cookie
 *
 * ## Protected
 * - `GET /api/auth/me` - Current user info
 * - `POST /api/projects` - Create a project
 * - `GET /api/projects` - List the caller's projects
 * - `POST /api/projects/{project_id}/members` - Add a member
 * - `GET /api/projects/{project_id}/issues` - List issues (filtered)
 * - `POST /api/projects/{project_id}/issues` - Report an issue
 * - `GET /api/issues/{issue_id}` - Issue detail
 * - `PATCH /api/issues/{issue_id}` - Partial update
 * - `DELETE /api/issues/{issue_id}` - Delete (maintainers)
 * - `GET /api/issues/{issue_id}/comments` - Comment thread
 * - `POST /api/issues/{issue_id}/comments` - Add a comment
 */

use axum::{middleware, Router};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::comments::{create_comment, list_comments};
use crate::backend::issues::{create_issue, delete_issue, get_issue, list_issues, update_issue};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::projects::{add_member, create_project, list_projects};
use crate::backend::server::state::AppState;

/// Attach the API routes to the router
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - Application state, needed here to instantiate the
///   authentication middleware for the protected table
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout));

    let protected = Router::new()
        .route("/api/auth/me", axum::routing::get(get_me))
        .route(
            "/api/projects",
            axum::routing::post(create_project).get(list_projects),
        )
        .route(
            "/api/projects/{project_id}/members",
            axum::routing::post(add_member),
        )
        .route(
            "/api/projects/{project_id}/issues",
            axum::routing::get(list_issues).post(create_issue),
        )
        .route(
            "/api/issues/{issue_id}",
            axum::routing::get(get_issue)
                .patch(update_issue)
                .delete(delete_issue),
        )
        .route(
            "/api/issues/{issue_id}/comments",
            axum::routing::get(list_comments).post(create_comment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    router.merge(public).merge(protected)
}
