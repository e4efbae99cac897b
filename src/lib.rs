//! # icon-search
//!
//! Keyword and fuzzy lookup over a fixed, small icon catalog.
//!
//! Given a free-text query, finds the records whose identifier, name, tags,
//! or description best match the query terms, tolerating typos and
//! compound-word variations. The catalog is loaded fully into memory per
//! invocation; there is no index, no persistence, and no network.
//!
//! ## Design
//!
//! - Queries are normalized to lowercase alphanumeric terms; every term must
//!   match some field variant or the record is excluded (AND across terms,
//!   OR across field variants)
//! - Fields are weighted (id > name > tags > description), each with a
//!   space-stripped variant so `"realtime"` matches `"real time"`
//! - Fuzzy matching uses a sequence-matcher similarity ratio with a 0.7 floor;
//!   exact substring hits always take the full field weight
//! - Records are ranked by summed per-term best scores; ties keep catalog
//!   order
//!
//! The pipeline is fully synchronous and deterministic: identical inputs
//! produce identical ordered output.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matcher;
pub mod types;

pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use types::{IconRecord, ScoredIcon};

/// Search the catalog for records matching `query`.
///
/// Normalizes the query into terms, scores every record, and returns the
/// matches ranked by relevance, truncated to `config.limit`. An empty or
/// punctuation-only query yields no terms and therefore an empty result:
/// under the all-terms-must-match policy, "no terms" means "no results",
/// not "match everything".
///
/// This is a pure computation over the in-memory catalog and cannot fail.
///
/// # Examples
///
/// ```
/// use icon_search::{search, IconRecord, SearchConfig};
///
/// let catalog = vec![IconRecord {
///     id: "arrow-up".into(),
///     name: "Arrow Up".into(),
///     tags: vec!["direction".into(), "navigation".into()],
///     description: "An upward pointing arrow".into(),
///     extra: Default::default(),
/// }];
///
/// // A misspelled query still matches via fuzzy similarity.
/// let results = search("arow", &catalog, &SearchConfig::default());
/// assert_eq!(results[0].id, "arrow-up");
/// ```
pub fn search(query: &str, catalog: &[IconRecord], config: &SearchConfig) -> Vec<IconRecord> {
    let terms = matcher::normalize::query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }
    tracing::trace!(?terms, limit = config.limit, "searching catalog");
    matcher::rank::rank(catalog, &terms, config.limit)
}

/// Search the catalog with the default configuration.
///
/// Convenience wrapper around [`search`] using [`SearchConfig::default()`]
/// (result limit of 10).
pub fn search_default(query: &str, catalog: &[IconRecord]) -> Vec<IconRecord> {
    search(query, catalog, &SearchConfig::default())
}
