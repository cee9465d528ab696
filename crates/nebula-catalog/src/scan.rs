//! Barcode scanner capability.
//!
//! The engine never looks at how a barcode was captured. A scanner only
//! has to hand over decoded barcode strings, which are then resolved
//! against the catalog with [`Catalog::find_by_barcode`].

use crate::catalog::{Catalog, Product};
use crate::error::ScanError;
use serde::Serialize;
use std::io::BufRead;

/// Something that yields decoded barcodes.
pub trait BarcodeSource {
    /// Next decoded barcode, or `None` once the source is exhausted.
    fn next_barcode(&mut self) -> Result<Option<String>, ScanError>;
}

/// Which kind of scanner is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScannerKind {
    Native,
    WebCamera,
    Unavailable,
}

impl ScannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerKind::Native => "native",
            ScannerKind::WebCamera => "web-camera",
            ScannerKind::Unavailable => "unavailable",
        }
    }
}

/// The scanner chosen for the running target.
pub enum Scanner {
    /// Platform barcode scanner.
    Native(Box<dyn BarcodeSource + Send>),
    /// Browser camera.
    WebCamera(Box<dyn BarcodeSource + Send>),
    /// No camera support on this target.
    Unavailable,
}

impl Scanner {
    pub fn kind(&self) -> ScannerKind {
        match self {
            Scanner::Native(_) => ScannerKind::Native,
            Scanner::WebCamera(_) => ScannerKind::WebCamera,
            Scanner::Unavailable => ScannerKind::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Scanner::Unavailable)
    }

    /// Wait for the next decoded barcode.
    pub fn scan(&mut self) -> Result<Option<String>, ScanError> {
        match self {
            Scanner::Native(source) | Scanner::WebCamera(source) => source.next_barcode(),
            Scanner::Unavailable => Err(ScanError::Unavailable),
        }
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Scanner").field(&self.kind()).finish()
    }
}

/// Reads one barcode per non-empty line.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> BarcodeSource for LineSource<R> {
    fn next_barcode(&mut self) -> Result<Option<String>, ScanError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let code = line.trim();
            if !code.is_empty() {
                return Ok(Some(code.to_string()));
            }
        }
    }
}

/// Result of resolving a scanned barcode.
///
/// An unknown barcode is an expected outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    Found { product: Product },
    NotFound { barcode: String },
}

impl ScanOutcome {
    /// Resolve `barcode` against `catalog`.
    pub fn resolve(catalog: &Catalog, barcode: &str) -> Self {
        match catalog.find_by_barcode(barcode) {
            Some(product) => ScanOutcome::Found {
                product: product.clone(),
            },
            None => ScanOutcome::NotFound {
                barcode: barcode.to_string(),
            },
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            ScanOutcome::Found { product } => Some(product),
            ScanOutcome::NotFound { .. } => None,
        }
    }
}
