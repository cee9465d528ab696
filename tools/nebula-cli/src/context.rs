//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use nebula_catalog::{Catalog, ProductId, ProductService};
use nebula_store::{Cache, Favorites, FileStore};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["nebula.toml", ".nebula.toml", "nebula.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Engine over the configured catalog.
    pub service: ProductService,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(&resolve(&cwd, path))?,
            None => match find_config(&cwd) {
                Some(path) => CliConfig::load(&path)?,
                None => CliConfig::default(),
            },
        };
        config.validate()?;

        let service = build_service(&cwd, &config)?;
        Ok(Self {
            config,
            output,
            cwd,
            service,
        })
    }

    /// Open the favorites service on the configured store, creating it.
    pub fn favorites(&self) -> Result<Favorites<FileStore>> {
        let dir = self.resolve_path(&self.config.store.dir);
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open favorites store: {}", dir.display()))?;
        Ok(Favorites::load(Cache::new(store)))
    }

    /// Favorites for read-only use; `None` when nothing was ever saved.
    pub fn stored_favorites(&self) -> Option<Favorites<FileStore>> {
        FileStore::open_existing(self.resolve_path(&self.config.store.dir))
            .map(|store| Favorites::load(Cache::new(store)))
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.stored_favorites()
            .is_some_and(|favorites| favorites.is_favorite(id))
    }

    /// Whether engine calls are delayed, i.e. worth a spinner.
    pub fn has_latency(&self) -> bool {
        let config = self.service.config();
        !config.list_latency.is_zero() || !config.lookup_latency.is_zero()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn build_service(cwd: &Path, config: &CliConfig) -> Result<ProductService> {
    let service_config = config.service.to_service_config();
    match config.catalog.path {
        Some(ref path) => {
            let path = resolve(cwd, path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
            let catalog = Catalog::from_json(&json)
                .with_context(|| format!("Invalid catalog: {}", path.display()))?;
            tracing::info!(path = %path.display(), products = catalog.len(), "loaded catalog");
            Ok(ProductService::with_config(Arc::new(catalog), service_config))
        }
        None => Ok(ProductService::builtin(service_config)),
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
