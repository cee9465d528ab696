//! Alternative-product recommendations.

use crate::catalog::{Catalog, Product};
use crate::rating::{Grade, RECOMMEND_THRESHOLD};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of recommendations shown before "more alternatives".
pub const PREVIEW_LEN: usize = 3;

impl Catalog {
    /// Products in `category` scoring at least grade B, in a fresh random order.
    ///
    /// `current` is the rating of the product being viewed. It is accepted
    /// but does not narrow the candidates: the cutoff is fixed at B.
    pub fn recommend(&self, category: &str, current: Option<Grade>) -> Vec<&Product> {
        self.recommend_with_rng(category, current, &mut rand::thread_rng())
    }

    /// [`Catalog::recommend`] with a caller-supplied random source.
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        category: &str,
        _current: Option<Grade>,
        rng: &mut R,
    ) -> Vec<&Product> {
        let mut candidates: Vec<&Product> = self
            .products()
            .iter()
            .filter(|p| p.category == category && p.score() >= RECOMMEND_THRESHOLD)
            .collect();
        candidates.shuffle(rng);
        tracing::debug!(category, candidates = candidates.len(), "recommendations");
        candidates
    }
}

/// A recommendation list with a short preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations<T> {
    pub items: Vec<T>,
}

impl<T> Recommendations<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// The first [`PREVIEW_LEN`] items.
    pub fn preview(&self) -> &[T] {
        &self.items[..self.items.len().min(PREVIEW_LEN)]
    }

    /// Whether items exist beyond the preview.
    pub fn has_more(&self) -> bool {
        self.items.len() > PREVIEW_LEN
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// No better alternative is available.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Recommendations<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
