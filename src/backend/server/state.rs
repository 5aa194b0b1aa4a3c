/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * Handlers only ever need the store, so they extract `State<SharedStore>`
 * instead of the whole `AppState`.
 *
 * ```rust
 * use axum::extract::State;
 * use inkpost::backend::store::SharedStore;
 *
 * async fn handler(State(store): State<SharedStore>) {
 *     let store = store.lock().await;
 *     let _count = store.posts.len();
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::store::{BlogStore, SharedStore};

/// Central state container for the router
#[derive(Clone)]
pub struct AppState {
    /// The single store every handler reads and writes
    pub store: SharedStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(BlogStore::new().shared())
    }

    pub fn with_store(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
