//! White similarity ("How to Strike a Match") implementation
//!
//! A variation on the Sørensen-Dice coefficient that disregards bigrams
//! touching whitespace, applies an uppercase fold, and respects bigram
//! multiplicity through greedy one-to-one matching. Compared to the plain
//! set-based [`dice_coefficient`](super::dice::dice_coefficient), repeated
//! bigrams must each find their own partner, so `"GG"` vs `"GGGGG"` scores
//! 0.4 rather than 1.0.
//!
//! # Complexity
//! - Time: O(m·n) worst case for the greedy matching over bigram lists
//! - Space: O(m + n) for the filtered bigram lists and consumed flags

use smallvec::SmallVec;

use super::units::{char_units, Unit};
use super::{FallibleSimilarity, MetricError, Similarity};

/// Upper-cased bigrams of the non-whitespace runs of `units`.
///
/// A whitespace unit invalidates both bigrams it touches; when the right
/// unit is whitespace the scan advances past it, so that unit is never
/// re-examined as a left unit.
fn word_letter_pairs<U: Unit>(units: &[U]) -> SmallVec<[(U, U); 32]> {
    let mut pairs = SmallVec::new();
    if units.len() < 2 {
        return pairs;
    }
    let limit = units.len() - 1;
    let mut i = 0;
    while i < limit {
        let right = units[i + 1];
        if right.is_space() {
            i += 2;
            continue;
        }
        let left = units[i];
        if !left.is_space() {
            pairs.push((left.to_upper(), right.to_upper()));
        }
        i += 1;
    }
    pairs
}

fn white_kernel<U: Unit>(a: &[U], b: &[U]) -> Result<f64, MetricError> {
    let a_pairs = word_letter_pairs(a);
    let b_pairs = word_letter_pairs(b);
    let union = a_pairs.len() + b_pairs.len();
    if union == 0 {
        return Err(MetricError::InsufficientContent);
    }

    // Greedy one-to-one matching: each bigram of `b` can satisfy at most
    // one bigram of `a`, tracked by a consumed flag per slot.
    let mut consumed: SmallVec<[bool; 32]> = smallvec::smallvec![false; b_pairs.len()];
    let mut intersection = 0usize;
    for a_bigram in &a_pairs {
        for (j, b_bigram) in b_pairs.iter().enumerate() {
            if !consumed[j] && a_bigram == b_bigram {
                consumed[j] = true;
                intersection += 1;
                break;
            }
        }
    }

    Ok(2.0 * intersection as f64 / union as f64)
}

/// White similarity over codepoint units.
///
/// Case-insensitive: both sides are upper-cased before matching. Fails
/// with [`MetricError::InsufficientContent`] when neither input yields a
/// non-whitespace bigram.
///
/// # Example
/// ```
/// use strmetrics::algorithms::white::white_similarity;
///
/// assert_eq!(white_similarity("Healed", "Healed"), Ok(1.0));
/// assert_eq!(white_similarity("Healed ", "HEALed"), Ok(1.0));
/// ```
pub fn white_similarity(a: &str, b: &str) -> Result<f64, MetricError> {
    let a_chars = char_units(a);
    let b_chars = char_units(b);
    white_kernel(&a_chars, &b_chars)
}

/// White similarity over raw byte units.
///
/// Whitespace and uppercase classification are single-byte only, so the
/// fold touches ASCII letters and the Latin-1 space bytes; multi-byte
/// codepoints pass through as opaque byte pairs.
pub fn white_similarity_bytes(a: &str, b: &str) -> Result<f64, MetricError> {
    white_kernel(a.as_bytes(), b.as_bytes())
}

/// White similarity calculator (codepoint units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct White;

impl White {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleSimilarity for White {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, MetricError> {
        white_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "white"
    }
}

/// Inputs without non-whitespace bigrams score `0.0` here rather than
/// failing. Use [`FallibleSimilarity`] to distinguish the two.
impl Similarity for White {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        FallibleSimilarity::similarity(self, a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "white"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within(actual: Result<f64, MetricError>, expected: f64, delta: f64) {
        let actual = actual.unwrap();
        assert!(
            (actual - expected).abs() <= delta,
            "expected {expected} ± {delta}, got {actual}"
        );
    }

    #[test]
    fn test_white_identical() {
        assert_eq!(white_similarity("Healed", "Healed"), Ok(1.0));
        assert_eq!(white_similarity("GGGG", "GGGG"), Ok(1.0));
    }

    #[test]
    fn test_white_gradient() {
        assert_within(white_similarity("Healed", "Sealed"), 0.8, 0.01);
        assert_within(white_similarity("Healed", "Healthy"), 0.55, 0.01);
        assert_within(white_similarity("Healed", "Heard"), 0.44, 0.01);
        assert_within(white_similarity("Healed", "Herded"), 0.40, 0.01);
        assert_within(white_similarity("Healed", "Help"), 0.25, 0.01);
        assert_within(white_similarity("Healed", "Sold"), 0.0, 0.01);
    }

    #[test]
    fn test_white_case_and_whitespace_insensitive() {
        assert_eq!(white_similarity("Healed ", "HEALed"), Ok(1.0));
    }

    #[test]
    fn test_white_multi_word() {
        assert_within(white_similarity("REPUBLIC OF FRANCE", "FRANCE"), 0.56, 0.01);
        assert_within(white_similarity("FRANCE", "QUEBEC"), 0.0, 0.001);
        assert_within(
            white_similarity("FRENCH REPUBLIC", "REPUBLIC OF FRANCE"),
            0.72,
            0.01,
        );
        assert_within(
            white_similarity("FRENCH REPUBLIC", "REPUBLIC OF CUBA"),
            0.61,
            0.01,
        );
    }

    #[test]
    fn test_white_respects_multiplicity() {
        assert_within(white_similarity("GG", "GGGGG"), 0.4, 0.01);
        assert_within(white_similarity("GGGGG", "GG"), 0.4, 0.01);
    }

    #[test]
    fn test_white_insufficient_content() {
        assert_eq!(white_similarity("", ""), Err(MetricError::InsufficientContent));
        assert_eq!(white_similarity("a", "b"), Err(MetricError::InsufficientContent));
        // whitespace-only inputs produce no bigrams either
        assert_eq!(white_similarity("  ", " \t "), Err(MetricError::InsufficientContent));
    }

    #[test]
    fn test_white_bytes_matches_chars_for_ascii() {
        assert_eq!(
            white_similarity("Healed ", "HEALed"),
            white_similarity_bytes("Healed ", "HEALed")
        );
        assert_eq!(
            white_similarity("FRENCH REPUBLIC", "REPUBLIC OF FRANCE"),
            white_similarity_bytes("FRENCH REPUBLIC", "REPUBLIC OF FRANCE")
        );
    }
}
