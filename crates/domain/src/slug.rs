//! Deterministic title slugification.

/// Slugify a listing title: whitespace runs collapse to single hyphens, case
/// is preserved, and characters outside `[A-Za-z0-9._~-]` are dropped.
///
/// The slug is computed once at creation time and is never recomputed when a
/// title changes later.
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
