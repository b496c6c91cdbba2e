//! Levenshtein (edit) distance implementation
//!
//! Minimum number of single-unit insertions, deletions, or substitutions
//! needed to transform one sequence into the other. Classic two-row dynamic
//! program with the shorter sequence on the column axis for O(min(n, m))
//! working space.
//!
//! The codepoint form decodes each input once per call; the byte form runs
//! directly over the string's storage, which is faster but counts one edit
//! per differing byte of a multi-byte codepoint.

use smallvec::SmallVec;

use super::units::char_units;
use super::EditDistance;

/// Single-row DP kernel for any comparable unit slice.
///
/// The row holds the previous DP row shifted in place; `diag` carries the
/// value the current cell needs from the row above and to the left.
fn levenshtein_kernel<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Shorter sequence on the column axis
    let (cols, rows) = if m < n { (a, b) } else { (b, a) };
    let width = cols.len();

    let mut row: SmallVec<[usize; 64]> = (0..=width).collect();

    for (i, ru) in rows.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for j in 0..width {
            let cost = if *ru == cols[j] { 0 } else { 1 };
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = diag + cost;

            diag = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[width]
}

/// Levenshtein distance over codepoint units.
///
/// # Example
/// ```
/// use strmetrics::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars = char_units(a);
    let b_chars = char_units(b);
    levenshtein_kernel(&a_chars, &b_chars)
}

/// Levenshtein distance over raw byte units.
#[must_use]
pub fn levenshtein_bytes(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    levenshtein_kernel(a.as_bytes(), b.as_bytes())
}

/// SIMD-accelerated Levenshtein distance over raw byte units.
///
/// Backed by triple_accel, which falls back to scalar code on CPUs without
/// SIMD support. Agrees with [`levenshtein_bytes`] on every input; prefer
/// it for long inputs or high call volumes on the byte path.
#[must_use]
pub fn levenshtein_simd(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    triple_accel::levenshtein::levenshtein(a.as_bytes(), b.as_bytes()) as usize
}

/// Normalized Levenshtein similarity (0.0 to 1.0) over codepoint units.
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let dist = levenshtein(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// Levenshtein distance calculator (codepoint units).
///
/// # Complexity
/// - Time: O(m*n) where m and n are the unit counts
/// - Space: O(min(m,n)) using the single-row DP optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

// ============================================================================
// Grapheme Cluster Mode
// ============================================================================

use unicode_segmentation::UnicodeSegmentation;

/// Levenshtein distance treating grapheme clusters as single units.
///
/// Useful for text with emoji sequences or combining characters where a
/// single visual character spans multiple codepoints.
///
/// # Examples
/// ```
/// use strmetrics::algorithms::levenshtein::levenshtein_grapheme;
///
/// // 👨‍👩‍👧‍👦 is 7 codepoints but 1 grapheme cluster
/// assert_eq!(levenshtein_grapheme("👨‍👩‍👧‍👦", "👨"), 1);
/// ```
#[must_use]
pub fn levenshtein_grapheme(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_graphemes: SmallVec<[&str; 64]> = a.graphemes(true).collect();
    let b_graphemes: SmallVec<[&str; 64]> = b.graphemes(true).collect();
    levenshtein_kernel(&a_graphemes, &b_graphemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("test", "tent"), 1);
        assert_eq!(levenshtein("gumbo", "gambol"), 2);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_empty_side_equals_other_length() {
        for s in ["a", "ab", "kitten", "日本語"] {
            assert_eq!(levenshtein(s, ""), s.chars().count());
            assert_eq!(levenshtein("", s), s.chars().count());
        }
    }

    #[test]
    fn test_levenshtein_symmetric() {
        assert_eq!(levenshtein("kitten", "sitting"), levenshtein("sitting", "kitten"));
        assert_eq!(levenshtein("gumbo", "gambol"), levenshtein("gambol", "gumbo"));
    }

    #[test]
    fn test_levenshtein_granularity_split() {
        // é is one codepoint but two bytes
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein_bytes("café", "cafe"), 2);
        assert_eq!(levenshtein("日本語", "日本"), 1);
        assert_eq!(levenshtein_bytes("日本語", "日本"), 3);
    }

    #[test]
    fn test_levenshtein_simd_agrees_with_bytes() {
        for (a, b) in [
            ("", ""),
            ("abc", ""),
            ("kitten", "sitting"),
            ("café", "cafe"),
            ("algorithm", "altruistic"),
        ] {
            assert_eq!(levenshtein_simd(a, b), levenshtein_bytes(a, b));
        }
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
        assert!((levenshtein_similarity("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_levenshtein_grapheme() {
        let family = "👨\u{200d}👩\u{200d}👧\u{200d}👦";
        assert_eq!(levenshtein_grapheme(family, "👨"), 1);
        assert!(levenshtein(family, "👨") > 1);
    }

    #[test]
    fn test_levenshtein_calculator() {
        let lev = Levenshtein::new();
        assert_eq!(lev.distance("kitten", "sitting"), 3);
        assert_eq!(lev.name(), "levenshtein");
    }
}
