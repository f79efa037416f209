//! Symptom text normalization.
//!
//! Must match the preprocessing applied to the catalog before the
//! vectorizer was fitted, otherwise vocabulary lookups silently miss.

/// Lowercase, turn commas into separators, collapse whitespace runs, trim.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space-separated tokens of already normalized text
pub fn tokens(normalized: &str) -> Vec<String> {
    normalized.split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect()
}
