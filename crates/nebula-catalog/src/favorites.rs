//! Favorites capability.
//!
//! The catalog does not own the favorites set. It only needs to ask
//! whether a product is bookmarked, and front ends need to flip it.

use crate::ids::ProductId;
use std::collections::{BTreeSet, HashSet};

/// Read access to a set of bookmarked products.
pub trait FavoriteSet {
    fn is_favorite(&self, id: ProductId) -> bool;
}

/// A favorites set that can be toggled.
pub trait FavoritesCapability: FavoriteSet {
    /// Flip membership of `id` and return whether it is now a favorite.
    fn toggle_favorite(&self, id: ProductId) -> bool;
}

impl FavoriteSet for HashSet<ProductId> {
    fn is_favorite(&self, id: ProductId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for BTreeSet<ProductId> {
    fn is_favorite(&self, id: ProductId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for [ProductId] {
    fn is_favorite(&self, id: ProductId) -> bool {
        self.contains(&id)
    }
}

impl FavoriteSet for Vec<ProductId> {
    fn is_favorite(&self, id: ProductId) -> bool {
        self.contains(&id)
    }
}

impl<T: FavoriteSet + ?Sized> FavoriteSet for &T {
    fn is_favorite(&self, id: ProductId) -> bool {
        (**self).is_favorite(id)
    }
}
