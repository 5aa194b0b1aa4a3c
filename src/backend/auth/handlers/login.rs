/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * Stub: the request body is never read and the same token is returned to
 * every caller.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::LoginResponse;
use crate::backend::auth::sessions::create_token;

pub async fn login() -> Json<LoginResponse> {
    tracing::debug!("Issuing mock login token");
    Json(LoginResponse {
        token: create_token(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::MOCK_TOKEN;

    #[tokio::test]
    async fn test_login_returns_fixed_token() {
        let Json(response) = login().await;
        assert_eq!(response.token, MOCK_TOKEN);
    }
}
