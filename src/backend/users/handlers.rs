//! User Profile HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::store::SharedStore;
use crate::shared::blog::{EntityId, StatusResponse, UpdateUserRequest, User, UserProfile};

/// Public profile: id, username, role, bio
pub async fn get_user(
    State(store): State<SharedStore>,
    Path(id): Path<EntityId>,
) -> BackendResult<Json<UserProfile>> {
    let store = store.lock().await;
    store
        .users
        .get(id)
        .map(User::profile)
        .map(Json)
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", id);
            BackendError::not_found("user", id)
        })
}

/// Update the bio. Other fields in the payload are ignored.
///
/// A missing or unreadable body is not an error: it changes nothing, and the
/// only failure left is an unknown id.
pub async fn update_user(
    State(store): State<SharedStore>,
    Path(id): Path<EntityId>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> BackendResult<Json<StatusResponse>> {
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => {
            tracing::debug!("Ignoring user update body: {}", rejection.body_text());
            UpdateUserRequest::default()
        }
    };

    store
        .lock()
        .await
        .users
        .update(id, |user| update.apply(user))
        .ok_or_else(|| BackendError::not_found("user", id))?;

    tracing::info!("Updated user {}", id);
    Ok(Json(StatusResponse::new("updated")))
}
