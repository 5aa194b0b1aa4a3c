//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Post, category, comment, user and auth endpoints
//!
//! # Route Order
//!
//! 1. **API Routes** - Posts, comments, categories, users
//! 2. **Auth Routes** - Register, login, me
//! 3. **Fallback Handler** - 404 for everything else

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
