/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * Creates an `author` account named `user` for the given email and returns
 * its id. Nothing in the payload is validated: a missing email or password is
 * stored as an empty string. Only a body that is not JSON is rejected.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::users::create_user;
use crate::backend::error::BackendResult;
use crate::backend::store::SharedStore;

pub async fn register(
    State(store): State<SharedStore>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> BackendResult<Json<RegisterResponse>> {
    let Json(request) = payload?;
    let (email, password) = request.into_credentials();

    let user_id = create_user(&mut *store.lock().await, email, password);
    tracing::info!("Registered user {}", user_id);

    Ok(Json(RegisterResponse {
        status: "registered".to_string(),
        user_id,
    }))
}
