//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - create an account
//! - **`login`** - POST /api/auth/login - fixed token
//! - **`me`** - GET /api/auth/me - fixed identity
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::auth::handlers::{register, login, me};
//! use inkpost::backend::store::SharedStore;
//! use axum::{routing::post, routing::get, Router};
//!
//! # fn example(store: SharedStore) {
//! let router: Router = Router::new()
//!     .route("/api/auth/register", post(register))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/me", get(me))
//!     .with_state(store);
//! # }
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login stub
pub mod login;

/// Current identity stub
pub mod me;

// Re-export commonly used types
pub use types::{LoginResponse, MeResponse, RegisterRequest, RegisterResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
pub use me::me;
