//! Server Module
//!
//! This module contains the code that assembles the Axum application.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Configuration loading (file + environment)
//! - **`init`** - Store creation and router assembly
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `config::load_config`
//! 2. **State Creation**: an empty `BlogStore` behind one mutex
//! 3. **Router Creation**: routes, tracing layer and 404 fallback
//!
//! The store is created here and nowhere else; its lifetime is the lifetime
//! of the router that owns the state.
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, create_app()).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_app_with_store};
pub use config::load_config;
