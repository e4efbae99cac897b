//! Weighted per-term scoring of icon records against query terms.
//!
//! Each record is rendered into weighted searchable text variants, one per
//! field plus a space-stripped form for compound-word matching. A query term
//! contributes the best it achieves across all variants; every term must
//! contribute something or the record is excluded outright.
//!
//! Formula per term: `weight * 1.0` for a substring hit, else
//! `weight * ratio` for the best word with sequence-similarity
//! `ratio >= 0.7`. The record score is the sum over terms.

use similar::TextDiff;

use crate::matcher::normalize::normalize;
use crate::types::IconRecord;

/// Minimum sequence-similarity ratio for a fuzzy word match to count.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Weight multiplier for the space-stripped variant of a field.
const COMPACT_FACTOR: f64 = 0.9;

// Field weights, in the fixed field order: id, name, tags, description.
const ID_WEIGHT: f64 = 3.0;
const NAME_WEIGHT: f64 = 2.5;
const TAGS_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Build the weighted searchable text variants for a record.
///
/// Produces the four normalized field texts in fixed order (id, name, tags
/// joined with single spaces, description). A field that still contains a
/// space after normalization additionally yields a space-stripped variant at
/// `weight * 0.9`, so a compound query term like `"realtime"` can match a
/// field rendered as `"real time"`. The result holds between 4 and 8
/// entries.
pub fn searchable_variants(icon: &IconRecord) -> Vec<(String, f64)> {
    let fields: [(String, f64); 4] = [
        (icon.id.clone(), ID_WEIGHT),
        (icon.name.clone(), NAME_WEIGHT),
        (icon.tags.join(" "), TAGS_WEIGHT),
        (icon.description.clone(), DESCRIPTION_WEIGHT),
    ];

    let mut variants = Vec::with_capacity(8);
    for (field, weight) in fields {
        let spaced = normalize(&field);
        if spaced.contains(' ') {
            let compact: String = spaced.chars().filter(|c| *c != ' ').collect();
            variants.push((spaced, weight));
            variants.push((compact, weight * COMPACT_FACTOR));
        } else {
            variants.push((spaced, weight));
        }
    }
    variants
}

/// Sequence-matcher similarity ratio between two strings.
///
/// `2 * M / T`, where `M` is the number of matching characters found by
/// longest-common-subsequence matching and `T` is the combined length of
/// both strings. Returns a value in `0.0..=1.0`; identical strings score
/// `1.0`. The 0.7 threshold is tuned against this ratio specifically, so a
/// generic edit-distance metric is not a substitute.
pub fn similarity(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Best contribution a single term achieves across all variants.
///
/// A contiguous substring hit takes the full variant weight and skips the
/// fuzzy pass for that variant. Otherwise each word of the variant (a
/// space-free variant is one word) is compared by [`similarity`], and words
/// at or above [`FUZZY_THRESHOLD`] contribute `weight * ratio`.
fn best_term_score(term: &str, variants: &[(String, f64)]) -> f64 {
    let mut best = 0.0_f64;
    for (text, weight) in variants {
        if text.contains(term) {
            best = best.max(*weight);
            continue;
        }
        for word in text.split_whitespace() {
            let ratio = similarity(term, word);
            if ratio >= FUZZY_THRESHOLD {
                best = best.max(weight * ratio);
            }
        }
    }
    best
}

/// Score a record against the query terms.
///
/// Returns a non-negative score; exactly `0.0` means the record is excluded.
/// Every term must achieve a nonzero best score against some variant (AND
/// across terms, OR across variants) or the record scores zero regardless of
/// the other terms. Otherwise the per-term best scores are summed, so
/// duplicate query terms contribute independently.
///
/// Assumes a well-formed record; the catalog loader rejects malformed
/// records before they reach the scorer.
pub fn score_icon(icon: &IconRecord, terms: &[String]) -> f64 {
    let variants = searchable_variants(icon);

    let mut total = 0.0;
    for term in terms {
        let best = best_term_score(term, &variants);
        if best == 0.0 {
            return 0.0;
        }
        total += best;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_icon(id: &str, name: &str, tags: &[&str], description: &str) -> IconRecord {
        IconRecord {
            id: id.into(),
            name: name.into(),
            tags: tags.iter().map(|t| (*t).into()).collect(),
            description: description.into(),
            extra: serde_json::Map::new(),
        }
    }

    fn arrow_up() -> IconRecord {
        make_icon(
            "arrow-up",
            "Arrow Up",
            &["direction", "navigation"],
            "An upward pointing arrow",
        )
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).into()).collect()
    }

    #[test]
    fn spaceless_fields_yield_four_variants() {
        let icon = make_icon("clock", "Clock", &["time"], "Timepiece");
        let variants = searchable_variants(&icon);
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn spaced_fields_yield_compact_variants() {
        // id normalizes to "arrow up", so every field contains a space.
        let variants = searchable_variants(&arrow_up());
        assert_eq!(variants.len(), 8);
    }

    #[test]
    fn compact_variant_carries_reduced_weight() {
        let icon = make_icon("x", "Real Time", &[], "y");
        let variants = searchable_variants(&icon);
        assert!(variants
            .iter()
            .any(|(text, weight)| text == "realtime" && (*weight - 2.25).abs() < f64::EPSILON));
    }

    #[test]
    fn variant_order_follows_field_order() {
        let variants = searchable_variants(&arrow_up());
        assert_eq!(variants[0].0, "arrow up");
        assert!((variants[0].1 - 3.0).abs() < f64::EPSILON);
        assert_eq!(variants[1].0, "arrowup");
        assert!((variants[1].1 - 2.7).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_of_identical_strings_is_one() {
        assert!((similarity("arrow", "arrow") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_of_disjoint_strings_is_zero() {
        assert!(similarity("abc", "xyz").abs() < f64::EPSILON);
    }

    #[test]
    fn similarity_matches_sequence_matcher_ratio() {
        // "arow" vs "arrow": 4 matching chars of 9 total, 2*4/9.
        let ratio = similarity("arow", "arrow");
        assert!((ratio - 8.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn substring_hit_takes_full_field_weight() {
        // "arrow" is a substring of the normalized id "arrow up", so the
        // contribution is the full 3.0 even though the fuzzy ratio against
        // either word would be lower.
        let score = score_icon(&arrow_up(), &terms(&["arrow"]));
        assert!((score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fuzzy_match_scales_weight_by_ratio() {
        // "arow" is a substring of nothing here; its best word match is
        // "arrow" in the id at ratio 8/9.
        let score = score_icon(&arrow_up(), &terms(&["arow"]));
        let expected = 3.0 * (8.0 / 9.0);
        assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn below_threshold_ratio_contributes_nothing() {
        // "dog" vs any word of the record stays under 0.7.
        let score = score_icon(&arrow_up(), &terms(&["dog"]));
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn any_unmatched_term_zeroes_the_record() {
        // "arrow" alone scores 3.0, but the unmatched second term excludes
        // the record entirely.
        let score = score_icon(&arrow_up(), &terms(&["arrow", "xyz123"]));
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn matched_terms_sum() {
        let single = score_icon(&arrow_up(), &terms(&["arrow"]));
        let double = score_icon(&arrow_up(), &terms(&["arrow", "up"]));
        assert!(double > single);
    }

    #[test]
    fn duplicate_terms_score_independently() {
        let once = score_icon(&arrow_up(), &terms(&["arrow"]));
        let twice = score_icon(&arrow_up(), &terms(&["arrow", "arrow"]));
        assert!((twice - 2.0 * once).abs() < 1e-9);
    }

    #[test]
    fn tags_match_as_joined_bag_of_words() {
        let icon = make_icon("x", "y", &["direction", "navigation"], "z");
        let score = score_icon(&icon, &terms(&["navigation"]));
        assert!((score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn id_match_outweighs_description_match() {
        let by_id = make_icon("target", "a", &[], "b");
        let by_description = make_icon("c", "d", &[], "target practice");
        let id_score = score_icon(&by_id, &terms(&["target"]));
        let description_score = score_icon(&by_description, &terms(&["target"]));
        assert!(id_score > description_score);
    }

    #[test]
    fn compound_term_matches_via_compact_variant() {
        // "realtime" fails as a substring of "real time sync" but hits the
        // space-stripped "realtimesync" variant at name weight * 0.9.
        let icon = make_icon("sync", "Real Time Sync", &[], "Continuous updates");
        let score = score_icon(&icon, &terms(&["realtime"]));
        assert!((score - 2.25).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_term_list_scores_zero() {
        // Callers short-circuit before scoring; zero terms sum to zero.
        let score = score_icon(&arrow_up(), &[]);
        assert!(score.abs() < f64::EPSILON);
    }
}
