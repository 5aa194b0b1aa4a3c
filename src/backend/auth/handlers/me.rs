/**
 * Current Identity Handler
 *
 * GET /api/auth/me
 *
 * Stub: no header or token is inspected; the answer is always user 1 with the
 * `admin` role, whether or not that user exists in the store.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::auth::sessions::MOCK_IDENTITY;

pub async fn me() -> Json<MeResponse> {
    let (id, role) = MOCK_IDENTITY;
    tracing::debug!("Reporting mock identity {} as {}", id, role);
    Json(MeResponse { id, role })
}
