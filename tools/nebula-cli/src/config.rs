//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use nebula_catalog::ServiceConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product dataset.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Engine call behaviour.
    #[serde(default)]
    pub service: ServiceSection,

    /// Favorites persistence.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> Result<()> {
        match self.log.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => anyhow::bail!("log.format must be 'pretty' or 'json', got '{}'", other),
        }
    }
}

/// Product dataset configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON dataset to use instead of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Artificial latency for engine calls, in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    /// Delay for search and recommendations.
    #[serde(default)]
    pub list_latency_ms: u64,

    /// Delay for single-product lookups.
    #[serde(default)]
    pub lookup_latency_ms: u64,
}

impl ServiceSection {
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig::new(
            Duration::from_millis(self.list_latency_ms),
            Duration::from_millis(self.lookup_latency_ms),
        )
    }
}

/// Favorites store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory of the file-backed store.
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

fn default_store_dir() -> String {
    ".nebula/store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_level")]
    pub level: String,

    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default nebula.toml config file.
pub fn generate_default_config() -> String {
    r#"# NebulaTide configuration

[catalog]
# JSON array of products to use instead of the built-in dataset.
# path = "products.json"

[service]
# Artificial latency in milliseconds, e.g. 100 / 50 to mimic a remote source.
list_latency_ms = 0
lookup_latency_ms = 0

[store]
dir = ".nebula/store"

[log]
level = "warn"
format = "pretty"
"#
    .to_string()
}
