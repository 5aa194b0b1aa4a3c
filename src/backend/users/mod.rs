//! Users Backend Module
//!
//! Profile reads and bio updates. Accounts are created through
//! `auth::register`; there is no deletion path.

pub mod handlers;

pub use handlers::{get_user, update_user};
