/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Posts
 * - `GET    /api/posts`                  - list published posts
 * - `POST   /api/posts`                  - create a draft
 * - `GET    /api/posts/{post}`           - get by slug
 * - `PUT    /api/posts/{post}`           - partial update by id
 * - `DELETE /api/posts/{post}`           - delete by id
 * - `POST   /api/posts/{post}/publish`   - publish by id
 * - `GET    /api/posts/{post}/comments`  - list comments
 * - `POST   /api/posts/{post}/comments`  - create comment
 *
 * ## Categories
 * - `GET  /api/categories`
 * - `POST /api/categories`
 *
 * ## Users
 * - `GET /api/users/{id}`
 * - `PUT /api/users/{id}`
 *
 * ## Authentication (stubs)
 * - `POST /api/auth/register`
 * - `POST /api/auth/login`
 * - `GET  /api/auth/me`
 *
 * The router allows a single parameter name per segment, so every post route
 * uses `{post}`. It is a slug for GET and a numeric id everywhere else; a
 * non-numeric id is rejected with 400 before the handler runs.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, me, register};
use crate::backend::categories::{create_category, list_categories};
use crate::backend::comments::{create_comment, list_comments};
use crate::backend::posts::{
    create_post, delete_post, get_post, list_published, publish_post, update_post,
};
use crate::backend::server::state::AppState;
use crate::backend::users::{get_user, update_user};

/// Add the post, category, comment and user routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Post endpoints
        .route("/api/posts", get(list_published).post(create_post))
        .route(
            "/api/posts/{post}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/posts/{post}/publish", post(publish_post))
        // Comment endpoints
        .route(
            "/api/posts/{post}/comments",
            get(list_comments).post(create_comment),
        )
        // Category endpoints
        .route("/api/categories", get(list_categories).post(create_category))
        // User endpoints
        .route("/api/users/{id}", get(get_user).put(update_user))
}

/// Add the mock authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
}
