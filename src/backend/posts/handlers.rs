//! Post HTTP Handlers
//!
//! Routes (all under the `{post}` path segment, see `routes::api_routes`):
//!
//! - `GET /api/posts` - published posts, oldest first
//! - `POST /api/posts` - create a draft
//! - `GET /api/posts/{post}` - fetch by slug, drafts included
//! - `PUT /api/posts/{post}` - partial update by id
//! - `DELETE /api/posts/{post}` - delete by id
//! - `POST /api/posts/{post}/publish` - publish by id

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::SharedStore;
use crate::shared::blog::{
    CreatePostRequest, CreatePostResponse, EntityId, ListPostsResponse, Post, StatusResponse,
    UpdatePostRequest, MOCK_USER_ID,
};

/// List published posts as `{id, title, slug}`
pub async fn list_published(State(store): State<SharedStore>) -> Json<ListPostsResponse> {
    let store = store.lock().await;
    let posts: Vec<_> = store.published_posts().map(Post::summary).collect();
    tracing::debug!("Listing {} published posts", posts.len());
    Json(ListPostsResponse { posts })
}

/// Create a draft post. The author is the mock identity.
pub async fn create_post(
    State(store): State<SharedStore>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> BackendResult<Json<CreatePostResponse>> {
    let Json(request) = payload?;
    let post = request.into_draft(MOCK_USER_ID).map_err(|e| {
        tracing::warn!("Rejected post creation: {}", e);
        e
    })?;
    let slug = post.slug.clone();

    let id = store.lock().await.posts.insert(post);
    tracing::info!("Created draft post {} ({})", id, slug);
    Ok(Json(CreatePostResponse { id, slug }))
}

/// Fetch a post by slug. Views are reported, not incremented.
pub async fn get_post(
    State(store): State<SharedStore>,
    Path(slug): Path<String>,
) -> BackendResult<Json<Post>> {
    let store = store.lock().await;
    store
        .post_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            tracing::warn!("Post not found by slug: {}", slug);
            BackendError::not_found("post", slug)
        })
}

/// Overwrite the fields present in the payload (title, content, tags)
pub async fn update_post(
    State(store): State<SharedStore>,
    Path(id): Path<EntityId>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> BackendResult<Json<StatusResponse>> {
    let Json(update) = payload?;

    let mut store = store.lock().await;
    store
        .posts
        .update(id, |post| update.apply(post))
        .ok_or_else(|| BackendError::not_found("post", id))?;

    tracing::info!("Updated post {}", id);
    Ok(Json(StatusResponse::new("updated").with_id(id)))
}

pub async fn delete_post(
    State(store): State<SharedStore>,
    Path(id): Path<EntityId>,
) -> BackendResult<Json<StatusResponse>> {
    let removed = store.lock().await.posts.remove(id);
    match removed {
        Some(post) => {
            tracing::info!("Deleted post {} ({})", id, post.slug);
            Ok(Json(StatusResponse::new("deleted")))
        }
        None => Err(BackendError::not_found("post", id)),
    }
}

/// Mark a post published. Publishing twice is a no-op.
pub async fn publish_post(
    State(store): State<SharedStore>,
    Path(id): Path<EntityId>,
) -> BackendResult<Json<StatusResponse>> {
    store
        .lock()
        .await
        .posts
        .update(id, |post| post.is_published = true)
        .ok_or_else(|| BackendError::not_found("post", id))?;

    tracing::info!("Published post {}", id);
    Ok(Json(StatusResponse::new("published")))
}
