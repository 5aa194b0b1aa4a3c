//! Authentication Module
//!
//! Mock authentication. Registration creates a real user record, but login and
//! identity lookups are stubs that ignore their input.
//!
//! # Architecture
//!
//! - **`users`** - Account creation in the store
//! - **`sessions`** - The fixed token and identity the stubs hand out
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Account creation
//! ├── sessions.rs     - Mock token and identity
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Login stub
//!     └── me.rs       - Current-identity stub
//! ```
//!
//! # Security
//!
//! SECURITY: this module is a known gap, not a design. Passwords are stored
//! as submitted, `login` issues the same token to everyone, and `me` trusts
//! nobody because it checks nothing. Nothing else in the service enforces
//! authorization. Replace before exposing the server to untrusted clients.

/// Account creation
pub mod users;

/// Mock token and identity
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginResponse, MeResponse, RegisterRequest, RegisterResponse};
pub use handlers::{login, me, register};
