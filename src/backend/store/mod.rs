//! Store Module
//!
//! The in-memory stand-in for a database: one insertion-ordered collection
//! per entity type, each with its own id counter, all behind a single
//! `tokio::sync::Mutex`.
//!
//! # Architecture
//!
//! - **`collection`** - `Collection<T>` and the `Record` trait (id assignment,
//!   linear find/update/remove)
//! - **`state`** - `BlogStore`, the four collections, and `SharedStore`
//!
//! There is no reader/writer split: listing posts blocks writers and other
//! readers alike. With one lock and no nested acquisition there is no lock
//! ordering to get wrong.
//!
//! # Example
//!
//! ```rust
//! use inkpost::backend::store::BlogStore;
//! use inkpost::shared::Category;
//!
//! let mut store = BlogStore::new();
//! let id = store.categories.insert(Category { id: 0, name: "Tech".into() });
//! assert_eq!(id, 1);
//! ```

/// Generic ordered collection
pub mod collection;

/// Blog store state
pub mod state;

pub use collection::{Collection, Record};
pub use state::{BlogStore, SharedStore};
