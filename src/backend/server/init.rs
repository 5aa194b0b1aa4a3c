/**
 * Server Initialization
 *
 * Builds the store and the router. There is nothing to restore: the store
 * always starts empty.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::store::SharedStore;

/// Create the application with a fresh, empty store.
pub fn create_app() -> Router<()> {
    tracing::info!("Initializing inkpost backend");
    let app_state = AppState::new();
    create_router(app_state)
}

/// Create the application around an existing store.
///
/// Tests use this to inspect the store after driving requests through the
/// router.
pub fn create_app_with_store(store: SharedStore) -> Router<()> {
    create_router(AppState::with_store(store))
}
