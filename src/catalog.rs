//! Catalog loading from the JSON icon index.
//!
//! The catalog is a single JSON document of shape `{ "icons": [...] }`,
//! loaded fully into memory per invocation. Load failures are fatal and
//! surface unmodified to the caller; there is no partial or lazy loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::types::IconRecord;

/// Environment variable overriding the catalog file location.
pub const CATALOG_ENV: &str = "ICON_SEARCH_CATALOG";

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "references/index.json";

/// The full in-memory icon catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// All records, in document order. This order is the ranking tie-break.
    pub icons: Vec<IconRecord>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::CatalogRead`] if the file cannot be read and
    /// [`SearchError::CatalogParse`] if it is not valid JSON of the expected
    /// shape, including any record missing a required field. Both messages
    /// carry the offending path.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| SearchError::CatalogRead(format!("{}: {e}", path.display())))?;
        let catalog: Self = serde_json::from_str(&raw)
            .map_err(|e| SearchError::CatalogParse(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            icons = catalog.icons.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Resolve the catalog path: `ICON_SEARCH_CATALOG` if set, else the default
/// location.
pub fn default_catalog_path() -> PathBuf {
    std::env::var_os(CATALOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}
