//! Levenshtein edit distance and the similarity score derived from it.
//!
//! Lengths are counted in characters, not bytes, so accented letters cost a
//! single edit.

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`. Case-sensitive.
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// `1 - distance / max_len`, in `[0, 1]`. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_from_distance(distance(a, b), a, b)
}

/// [`similarity`] for a pair whose distance is already known.
pub fn similarity_from_distance(edits: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - edits as f64 / max_len as f64
}

/// Whether `a` can be turned into `b` with at most `max_edits` edits.
pub fn within_threshold(a: &str, b: &str, max_edits: usize) -> bool {
    distance(a, b) <= max_edits
}
