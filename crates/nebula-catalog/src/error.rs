//! Catalog error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur while building or loading a catalog.
///
/// Lookups never produce these: an unknown id or barcode is `None`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// Two products share a barcode.
    #[error("Duplicate barcode {barcode} (products {first} and {second})")]
    DuplicateBarcode {
        barcode: String,
        first: ProductId,
        second: ProductId,
    },

    /// Rating symbol outside the 13 known grades.
    #[error("Invalid rating grade: {0:?}")]
    InvalidGrade(String),

    /// Dataset could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Errors produced by a scanner capability.
#[derive(Error, Debug)]
pub enum ScanError {
    /// No scanner is available on this target.
    #[error("No barcode scanner available")]
    Unavailable,

    /// Reading from the underlying source failed.
    #[error("Scanner I/O error: {0}")]
    Io(#[from] std::io::Error),
}
