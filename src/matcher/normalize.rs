//! Text normalization for queries and record fields.
//!
//! Canonicalises arbitrary text into a lowercase stream of ASCII
//! alphanumerics and spaces so that queries and fields compare on equal
//! footing regardless of punctuation, separators, or case.

/// Normalise text for matching.
///
/// Lowercases the input, then replaces every character that is not a
/// lowercase ASCII letter, digit, or space with a space. Runs of spaces are
/// **not** collapsed and the result is not trimmed; whitespace splitting
/// downstream absorbs them.
///
/// Pure and total: never fails, and `normalize("")` is `""`.
///
/// # Examples
///
/// ```
/// use icon_search::matcher::normalize::normalize;
///
/// assert_eq!(normalize("Arrow-Up!"), "arrow up ");
/// assert_eq!(normalize("real_time v2"), "real time v2");
/// ```
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Extract normalized search terms from a raw query.
///
/// Splits the normalized query on whitespace, discarding empty tokens.
/// Duplicate terms are preserved in order: each occurrence is scored
/// independently, so repeating a term reinforces its required presence.
///
/// An empty or punctuation-only query yields no terms, which the search
/// entry point defines as "no results".
pub fn query_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
