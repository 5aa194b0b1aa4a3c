//! Comment HTTP Handlers
//!
//! Neither handler checks that the post exists: listing comments of a missing
//! post yields an empty list, and commenting on one succeeds.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::BackendResult;
use crate::backend::store::SharedStore;
use crate::shared::blog::{
    Comment, CreateCommentRequest, CreateCommentResponse, EntityId, ListCommentsResponse,
    MOCK_USER_ID,
};

/// List comments on a post as `{id, user_id, content}`
pub async fn list_comments(
    State(store): State<SharedStore>,
    Path(post_id): Path<EntityId>,
) -> Json<ListCommentsResponse> {
    let store = store.lock().await;
    Json(ListCommentsResponse {
        comments: store.comments_for_post(post_id).map(Comment::summary).collect(),
    })
}

/// Add a comment as the mock identity
pub async fn create_comment(
    State(store): State<SharedStore>,
    Path(post_id): Path<EntityId>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> BackendResult<Json<CreateCommentResponse>> {
    let Json(request) = payload?;
    let comment = request.into_comment(post_id, MOCK_USER_ID)?;

    let id = store.lock().await.comments.insert(comment);
    tracing::info!("Created comment {} on post {}", id, post_id);
    Ok(Json(CreateCommentResponse { id, post_id }))
}
