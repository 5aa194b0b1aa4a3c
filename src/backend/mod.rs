//! Backend Module
//!
//! This module contains all server-side code for the blog API.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - The in-memory collections and their single lock
//! - **`posts`** - Post handlers (list, create, get, update, delete, publish)
//! - **`categories`** - Category handlers
//! - **`comments`** - Comment handlers
//! - **`users`** - User profile handlers
//! - **`auth`** - Registration and the login/identity stubs
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Config, state, initialization
//! ├── routes/         - Route configuration
//! ├── store/          - In-memory store
//! ├── posts/          - Post handlers
//! ├── categories/     - Category handlers
//! ├── comments/       - Comment handlers
//! ├── users/          - User handlers
//! ├── auth/           - Auth handlers
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! request → router resolves handler → handler validates the payload →
//! handler locks the store → scan / mutate / append → guard drops →
//! handler serializes the result.

/// Server initialization and state
pub mod server;

/// HTTP route configuration
pub mod routes;

/// In-memory store
pub mod store;

/// Post handlers
pub mod posts;

/// Category handlers
pub mod categories;

/// Comment handlers
pub mod comments;

/// User profile handlers
pub mod users;

/// Authentication handlers
pub mod auth;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
pub use store::{BlogStore, SharedStore};
