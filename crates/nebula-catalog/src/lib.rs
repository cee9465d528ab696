//! Product catalog and rating engine for NebulaTide.
//!
//! This crate provides:
//!
//! - **Catalog**: immutable product records with environmental ratings
//! - **Search**: substring search and lookups by id or barcode
//! - **Recommendations**: better-rated alternatives within a category
//! - **Scanning**: the scanner capability and barcode resolution
//! - **Service**: the async engine front ends call into
//!
//! # Example
//!
//! ```rust,ignore
//! use nebula_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let product = catalog.find_by_barcode("8711000500019").unwrap();
//! for alt in catalog.recommend(&product.category, product.rating) {
//!     println!("{} {} ({})", alt.brand, alt.name, alt.rating.unwrap());
//! }
//! ```

pub mod error;
pub mod favorites;
pub mod ids;
pub mod rating;
pub mod scan;
pub mod service;

pub mod catalog;
pub mod search;

pub use catalog::{Catalog, Polarity, Product, Reason};
pub use error::{CatalogError, ScanError};
pub use favorites::{FavoriteSet, FavoritesCapability};
pub use ids::ProductId;
pub use rating::{grade_score, Grade, ScoreBand, RECOMMEND_THRESHOLD};
pub use search::{Recommendations, PREVIEW_LEN};
pub use service::{ProductDetail, ProductService, ServiceConfig};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, Polarity, Product, Reason};
    pub use crate::error::{CatalogError, ScanError};
    pub use crate::favorites::{FavoriteSet, FavoritesCapability};
    pub use crate::ids::ProductId;
    pub use crate::rating::{Grade, ScoreBand};
    pub use crate::scan::{BarcodeSource, LineSource, ScanOutcome, Scanner, ScannerKind};
    pub use crate::search::Recommendations;
    pub use crate::service::{ProductDetail, ProductService, ServiceConfig};
}
