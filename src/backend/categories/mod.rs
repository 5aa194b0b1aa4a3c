//! Categories Backend Module

pub mod handlers;

pub use handlers::{create_category, list_categories};
