//! Error types for the icon-search crate.
//!
//! All errors use stable string messages suitable for display to users.
//! The matching pipeline itself is a pure computation and never fails;
//! errors arise only at the catalog and output boundaries.

/// Errors that can occur while loading the catalog or emitting results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The catalog file could not be read.
    #[error("catalog read error: {0}")]
    CatalogRead(String),

    /// The catalog file is not valid JSON, or a record is malformed.
    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    /// Search results could not be serialized for output.
    #[error("output error: {0}")]
    Output(String),
}

/// Convenience type alias for icon-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
