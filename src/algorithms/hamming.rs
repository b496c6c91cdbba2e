//! Hamming distance implementation
//!
//! Counts positions where the corresponding units differ. Only defined for
//! sequences of equal unit count.
//!
//! # Important: Length Mismatch Behavior
//!
//! Hamming distance is mathematically undefined for sequences of different
//! lengths, and the two granularities disagree about what "length" means:
//! `"日本語"` and `"日本g"` both contain three codepoints, but nine and
//! seven bytes. The codepoint form accepts that pair; the byte form fails
//! with [`MetricError::LengthMismatch`].
//!
//! # Complexity
//! - Time: O(n) in the unit count
//! - Space: O(1) beyond the decoded codepoint sequence

use super::units::char_units;
use super::{FallibleEditDistance, MetricError, Similarity};

/// Positions at which the two slices disagree.
#[inline]
fn hamming_kernel<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, MetricError> {
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Hamming distance over codepoint units.
///
/// # Example
/// ```
/// use strmetrics::algorithms::hamming::hamming_distance;
///
/// assert_eq!(hamming_distance("toned", "roses"), Ok(3));
/// assert!(hamming_distance("green eggs", "ham").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, MetricError> {
    let a_chars = char_units(a);
    let b_chars = char_units(b);
    hamming_kernel(&a_chars, &b_chars)
}

/// Hamming distance over raw byte units.
///
/// Suited for speedy comparisons when the inputs contain no multi-byte
/// codepoints; one differing multi-byte codepoint counts once per byte.
pub fn hamming_distance_bytes(a: &str, b: &str) -> Result<usize, MetricError> {
    hamming_kernel(a.as_bytes(), b.as_bytes())
}

/// Normalized Hamming similarity (0.0 to 1.0) over codepoint units.
pub fn hamming_similarity(a: &str, b: &str) -> Result<f64, MetricError> {
    let dist = hamming_distance(a, b)?;
    let len = a.chars().count();
    if len == 0 {
        Ok(1.0)
    } else {
        Ok(1.0 - (dist as f64 / len as f64))
    }
}

/// Hamming distance calculator (codepoint units).
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hamming;

impl Hamming {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleEditDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Result<usize, MetricError> {
        hamming_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}

/// Unequal-length inputs score `0.0` here rather than failing. Use
/// [`FallibleEditDistance`] to distinguish "undefined comparison" from
/// "no similarity".
impl Similarity for Hamming {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        FallibleEditDistance::similarity(self, a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "hamming"
    }
}
