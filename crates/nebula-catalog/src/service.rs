//! Async product service.
//!
//! Front ends call the engine through this service so that the data source
//! can later move behind a network boundary without changing call sites.
//! Results are owned copies; the shared catalog is never handed out mutably.

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::rating::Grade;
use crate::scan::ScanOutcome;
use crate::search::Recommendations;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Artificial latency applied before answering.
///
/// Zero by default. Dropping a pending call cancels the delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Delay for list operations (search, recommend).
    pub list_latency: Duration,
    /// Delay for single-product lookups.
    pub lookup_latency: Duration,
}

impl ServiceConfig {
    pub fn new(list_latency: Duration, lookup_latency: Duration) -> Self {
        Self {
            list_latency,
            lookup_latency,
        }
    }

    /// Delays that mimic a remote data source (100ms lists, 50ms lookups).
    pub fn simulated() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_millis(50))
    }

    /// Same delay for every call.
    pub fn uniform(latency: Duration) -> Self {
        Self::new(latency, latency)
    }
}

/// A product together with its alternatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub recommendations: Recommendations<Product>,
}

/// Lookup and recommendation engine behind an async calling convention.
#[derive(Debug, Clone)]
pub struct ProductService {
    catalog: Arc<Catalog>,
    config: ServiceConfig,
}

impl ProductService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, ServiceConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: ServiceConfig) -> Self {
        Self { catalog, config }
    }

    /// Service over the built-in dataset.
    pub fn builtin(config: ServiceConfig) -> Self {
        Self::with_config(Catalog::shared(), config)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    pub async fn search(&self, term: &str) -> Vec<Product> {
        delay(self.config.list_latency).await;
        self.catalog.search(term).into_iter().cloned().collect()
    }

    pub async fn find_by_id(&self, id: ProductId) -> Option<Product> {
        delay(self.config.lookup_latency).await;
        self.catalog.find_by_id(id).cloned()
    }

    pub async fn find_by_barcode(&self, barcode: &str) -> Option<Product> {
        delay(self.config.lookup_latency).await;
        self.catalog.find_by_barcode(barcode).cloned()
    }

    pub async fn recommend(&self, category: &str, current: Option<Grade>) -> Vec<Product> {
        delay(self.config.list_latency).await;
        self.catalog
            .recommend(category, current)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Terminal step of the scan flow.
    pub async fn resolve_scan(&self, barcode: &str) -> ScanOutcome {
        delay(self.config.lookup_latency).await;
        let outcome = ScanOutcome::resolve(&self.catalog, barcode);
        tracing::info!(
            barcode,
            found = outcome.product().is_some(),
            "resolved scanned barcode"
        );
        outcome
    }

    /// Load a product and its recommendations, ranked by its own category.
    pub async fn detail(&self, id: ProductId) -> Option<ProductDetail> {
        let product = self.find_by_id(id).await?;
        let recommendations = self.recommend(&product.category, product.rating).await;
        Some(ProductDetail {
            product,
            recommendations: Recommendations::new(recommendations),
        })
    }
}

async fn delay(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
