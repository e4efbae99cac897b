//! Core types for icon catalog records and scoring.

use serde::{Deserialize, Serialize};

/// A single icon record from the catalog.
///
/// The four named fields are searchable; any additional fields present in the
/// catalog document are captured in [`IconRecord::extra`] and pass through
/// untouched into search results. All four named fields are required: a
/// catalog record missing one fails to deserialize, which surfaces as a fatal
/// load error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Short identifier, unique within the catalog.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Short descriptive keywords. Order is irrelevant to scoring; the list
    /// is matched as a joined bag of words.
    pub tags: Vec<String>,
    /// Free-text description sentence.
    pub description: String,
    /// Any further catalog fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A record paired with its computed relevance score.
///
/// Exists only between scoring and truncation inside the ranker; scores are
/// not exposed in search results.
#[derive(Debug, Clone)]
pub struct ScoredIcon {
    /// Summed per-term best score. Always greater than zero for kept records.
    pub score: f64,
    /// The record being ranked.
    pub icon: IconRecord,
}
