//! Key-value persistence for NebulaTide.
//!
//! Provides a small get/set contract over serialized blobs, an in-memory
//! and a file-backed implementation, a typed JSON [`Cache`] on top, and the
//! [`Favorites`] service that keeps the user's bookmarks.
//!
//! # Example
//!
//! ```rust,ignore
//! use nebula_store::{Cache, Favorites, FileStore};
//!
//! let favorites = Favorites::load(Cache::new(FileStore::open(".nebula/store")?));
//! favorites.toggle(ProductId::new(3));
//! favorites.shutdown()?;
//! ```

mod error;
mod favorites;
mod kv;

pub use error::StoreError;
pub use favorites::{Favorites, ToggleOutcome, FAVORITES_KEY};
pub use kv::{Cache, FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, Favorites, FileStore, KvStore, MemoryStore, StoreError, ToggleOutcome};
}
