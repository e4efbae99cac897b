//! Ranking and truncation of scored records.
//!
//! Scores every catalog record, drops the excluded ones, sorts by score
//! descending, and truncates to the caller's limit. The sort is stable, so
//! records with equal scores keep their catalog order; that tie-break is a
//! contract, not an accident.

use std::cmp::Ordering;

use crate::matcher::scoring::score_icon;
use crate::types::{IconRecord, ScoredIcon};

/// Rank the catalog against the query terms and return the top records.
///
/// Records are scored in catalog iteration order; only scores greater than
/// zero are kept. Ties in the descending sort retain catalog order. The
/// returned records carry no scores. A `limit` of zero yields an empty
/// vector; a limit beyond the match count returns every match.
pub fn rank(catalog: &[IconRecord], terms: &[String], limit: usize) -> Vec<IconRecord> {
    let mut scored: Vec<ScoredIcon> = Vec::new();
    for icon in catalog {
        let score = score_icon(icon, terms);
        if score > 0.0 {
            scored.push(ScoredIcon {
                score,
                icon: icon.clone(),
            });
        }
    }
    tracing::debug!(
        candidates = catalog.len(),
        matched = scored.len(),
        "scored catalog"
    );

    // Stable sort: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    scored.into_iter().map(|entry| entry.icon).collect()
}
