//! Favorites service backed by the key-value store.
//!
//! The set is loaded once when the service is constructed and written back
//! as a whole on every toggle. Storage failures are logged and never undo
//! the in-memory change; the next successful write catches the store up.
//!
//! A blob that could not be read is never overwritten: after a failed load
//! the service keeps working in memory only.

use crate::kv::{Cache, KvStore};
use crate::StoreError;
use nebula_catalog::{FavoriteSet, FavoritesCapability, ProductId};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::watch;

/// Key the favorites blob is stored under.
pub const FAVORITES_KEY: &str = "nebulaTideFavorites";

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// Membership after the toggle.
    pub favorite: bool,
    /// Whether the new set reached the store.
    pub persisted: bool,
}

/// Owner of the user's bookmarked products.
///
/// Observers get snapshots through [`Favorites::subscribe`]; the channel
/// closes when the service is shut down.
pub struct Favorites<S: KvStore> {
    cache: Cache<S>,
    key: String,
    ids: Mutex<Vec<ProductId>>,
    notify: watch::Sender<Vec<ProductId>>,
    load_failed: bool,
    /// A toggle has not reached the store yet.
    dirty: AtomicBool,
}

impl<S: KvStore> Favorites<S> {
    /// Load the favorites stored under [`FAVORITES_KEY`].
    pub fn load(cache: Cache<S>) -> Self {
        Self::load_with_key(cache, FAVORITES_KEY)
    }

    /// Load the favorites stored under `key`.
    ///
    /// A missing or unreadable blob starts an empty set. An unreadable
    /// blob is left untouched for the lifetime of the service.
    pub fn load_with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut load_failed = false;
        let ids = match cache.get::<Vec<ProductId>>(&key) {
            Ok(Some(stored)) => dedup(stored),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(key = %key, error = %e, "failed to load favorites");
                load_failed = true;
                Vec::new()
            }
        };
        tracing::debug!(key = %key, count = ids.len(), "favorites loaded");

        let (notify, _) = watch::channel(ids.clone());
        Self {
            cache,
            key,
            ids: Mutex::new(ids),
            notify,
            load_failed,
            dirty: AtomicBool::new(false),
        }
    }

    /// The stored set could not be read, so nothing will be written back.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.lock().contains(&id)
    }

    /// Flip membership of `id`, persist the new set and notify observers.
    pub fn toggle(&self, id: ProductId) -> ToggleOutcome {
        let mut ids = self.lock();
        let favorite = match ids.iter().position(|&f| f == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id);
                true
            }
        };

        let persisted = self.persist(ids.as_slice());
        self.dirty.store(!persisted, Ordering::SeqCst);
        self.notify.send_replace(ids.clone());
        drop(ids);

        tracing::info!(product = %id, favorite, persisted, "favorite toggled");
        ToggleOutcome {
            favorite,
            persisted,
        }
    }

    /// Bookmarked ids in the order they were added.
    pub fn ids(&self) -> Vec<ProductId> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Receive a snapshot of the set after every toggle.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ProductId>> {
        self.notify.subscribe()
    }

    /// Write any unsaved change and close the observer channel.
    ///
    /// Nothing is written when the store is already up to date or when the
    /// stored set could not be read.
    pub fn shutdown(self) -> Result<(), StoreError> {
        if self.load_failed || !self.dirty.load(Ordering::SeqCst) {
            return Ok(());
        }
        let ids = self.ids();
        let result = self.cache.set(&self.key, ids.as_slice());
        if let Err(ref e) = result {
            tracing::error!(key = %self.key, error = %e, "failed to flush favorites on shutdown");
        }
        result
    }

    fn persist(&self, ids: &[ProductId]) -> bool {
        if self.load_failed {
            tracing::warn!(key = %self.key, "stored favorites unreadable, keeping changes in memory");
            return false;
        }
        match self.cache.set(&self.key, ids) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to save favorites");
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProductId>> {
        self.ids.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: KvStore> FavoriteSet for Favorites<S> {
    fn is_favorite(&self, id: ProductId) -> bool {
        Favorites::is_favorite(self, id)
    }
}

impl<S: KvStore> FavoritesCapability for Favorites<S> {
    fn toggle_favorite(&self, id: ProductId) -> bool {
        self.toggle(id).favorite
    }
}

fn dedup(stored: Vec<ProductId>) -> Vec<ProductId> {
    let mut ids = Vec::with_capacity(stored.len());
    for id in stored {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use std::sync::Arc;

    /// Memory store whose writes can be switched off.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
    }

    impl KvStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StoreError::StoreError("read refused".into()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::StoreError("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> Result<(), StoreError> {
            self.inner.delete(key)
        }

        fn keys(&self) -> Result<Vec<String>, StoreError> {
            self.inner.keys()
        }
    }

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_toggle_twice_restores() {
        let favorites = Favorites::load(Cache::new(MemoryStore::new()));
        assert!(!favorites.is_favorite(id(1)));

        assert_eq!(
            favorites.toggle(id(1)),
            ToggleOutcome {
                favorite: true,
                persisted: true
            }
        );
        assert!(favorites.is_favorite(id(1)));

        assert!(!favorites.toggle(id(1)).favorite);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_insertion_order_kept() {
        let favorites = Favorites::load(Cache::new(MemoryStore::new()));
        favorites.toggle(id(5));
        favorites.toggle(id(2));
        favorites.toggle(id(9));
        favorites.toggle(id(2));
        assert_eq!(favorites.ids(), vec![id(5), id(9)]);
    }

    #[test]
    fn test_reload_from_same_store() {
        let store = Arc::new(MemoryStore::new());
        let favorites = Favorites::load(Cache::new(store.clone()));
        favorites.toggle(id(3));
        favorites.toggle(id(1));
        favorites.shutdown().unwrap();

        let reloaded = Favorites::load(Cache::new(store.clone()));
        assert_eq!(reloaded.ids(), vec![id(3), id(1)]);
        assert_eq!(store.get(FAVORITES_KEY).unwrap().unwrap(), b"[3,1]".to_vec());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(FlakyStore::default());
        let favorites = Favorites::load(Cache::new(store.clone()));

        store.fail_writes.store(true, Ordering::SeqCst);
        let outcome = favorites.toggle(id(7));
        assert!(outcome.favorite);
        assert!(!outcome.persisted);
        assert!(favorites.is_favorite(id(7)));

        // The next successful toggle writes the full set.
        store.fail_writes.store(false, Ordering::SeqCst);
        assert!(favorites.toggle(id(8)).persisted);
        let reloaded = Favorites::load(Cache::new(store.clone()));
        assert_eq!(reloaded.ids(), vec![id(7), id(8)]);
    }

    #[test]
    fn test_read_failure_starts_empty() {
        let store = Arc::new(FlakyStore::default());
        store.inner.set(FAVORITES_KEY, b"[1,2]").unwrap();
        store.fail_reads.store(true, Ordering::SeqCst);

        let favorites = Favorites::load(Cache::new(store));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_corrupt_blob_starts_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(FAVORITES_KEY, b"{oops").unwrap();
        assert!(Favorites::load(Cache::new(store)).is_empty());
    }

    #[test]
    fn test_corrupt_blob_survives_toggle_and_shutdown() {
        let store = Arc::new(MemoryStore::new());
        store.set(FAVORITES_KEY, b"[1,2").unwrap();

        let favorites = Favorites::load(Cache::new(store.clone()));
        assert!(favorites.load_failed());

        let outcome = favorites.toggle(id(3));
        assert!(outcome.favorite);
        assert!(!outcome.persisted);
        assert!(favorites.is_favorite(id(3)));

        favorites.shutdown().unwrap();
        assert_eq!(store.get(FAVORITES_KEY).unwrap().unwrap(), b"[1,2".to_vec());
    }

    #[test]
    fn test_shutdown_without_changes_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let favorites = Favorites::load(Cache::new(store.clone()));
        assert!(!favorites.load_failed());

        favorites.shutdown().unwrap();
        assert_eq!(store.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_shutdown_flushes_failed_write() {
        let store = Arc::new(FlakyStore::default());
        let favorites = Favorites::load(Cache::new(store.clone()));

        store.fail_writes.store(true, Ordering::SeqCst);
        assert!(!favorites.toggle(id(6)).persisted);

        store.fail_writes.store(false, Ordering::SeqCst);
        favorites.shutdown().unwrap();
        assert_eq!(store.inner.get(FAVORITES_KEY).unwrap().unwrap(), b"[6]".to_vec());
    }

    #[test]
    fn test_duplicate_ids_in_blob_collapse() {
        let store = Arc::new(MemoryStore::new());
        store.set(FAVORITES_KEY, b"[4,4,2,4]").unwrap();
        assert_eq!(Favorites::load(Cache::new(store)).ids(), vec![id(4), id(2)]);
    }

    #[test]
    fn test_observers_see_snapshots() {
        let favorites = Favorites::load(Cache::new(MemoryStore::new()));
        let mut rx = favorites.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        favorites.toggle(id(1));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![id(1)]);

        favorites.shutdown().unwrap();
        assert!(rx.has_changed().is_err());
    }

    #[test]
    fn test_capability_traits() {
        let favorites = Favorites::load(Cache::new(MemoryStore::new()));
        let capability: &dyn FavoritesCapability = &favorites;
        assert!(capability.toggle_favorite(id(2)));
        assert!(capability.is_favorite(id(2)));
        assert!(!capability.toggle_favorite(id(2)));
    }
}
