/**
 * Router Configuration
 *
 * Combines all route groups into one Axum router, adds request tracing and
 * a 404 fallback, and attaches the application state.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{configure_api_routes, configure_auth_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router);
    let router = configure_auth_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
