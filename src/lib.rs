//! Inkpost - Main Library
//!
//! Inkpost is a small blogging backend: posts, categories, comments and user
//! profiles served over HTTP/JSON, with mock authentication endpoints.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the server and its clients
//!   - Entity records (User, Post, Category, Comment)
//!   - Request and response payloads
//!   - Error types and application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router and handlers
//!   - The in-memory store guarded by a single lock
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (axum, tokio, tracing-subscriber).
//!   On by default.
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app();
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Storage
//!
//! All data lives in process memory. Nothing survives a restart, and there is
//! no multi-process consistency: the store is one value created at startup and
//! handed to every handler through axum state.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
