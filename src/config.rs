//! Search configuration with sensible defaults.

/// Configuration for a catalog search.
///
/// Use [`Default::default()`] for the standard result limit, or construct
/// with a field override for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of results to return after ranking. A limit of zero
    /// is valid and yields an empty result list.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}
