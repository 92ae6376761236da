//! Catalog Config

use std::path::PathBuf;

use clap::Args;
use storefront::{
    catalog::{CatalogError, bundled_catalog, load_catalog},
    snapshot::ProductSnapshot,
};

/// Product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Path to a YAML product catalog; the bundled catalog is used when omitted
    #[arg(long, env = "STOREFRONT_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    pub fn load(&self) -> Result<ProductSnapshot, CatalogError> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => bundled_catalog(),
        }
    }
}
