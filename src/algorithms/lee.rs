//! Lee distance implementation
//!
//! Per-position circular distance over a q-ary alphabet: each index
//! contributes `min(d, q - d)` where `d` is the difference of the two unit
//! values reduced modulo `q`. Circular distance depends only on the
//! difference class, so unit values outside `0..q` still compare
//! consistently.
//!
//! For `q = 2` over binary-valued units the per-position contribution is
//! 0 or 1 and the result equals the Hamming distance.
//!
//! # Complexity
//! - Time: O(n) in the unit count

use super::units::{char_units, Unit};
use super::{FallibleEditDistance, MetricError};

fn lee_kernel<U: Unit>(a: &[U], b: &[U], q: u32) -> Result<usize, MetricError> {
    if q < 2 {
        return Err(MetricError::InvalidAlphabetSize(q));
    }
    if a.len() != b.len() {
        return Err(MetricError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let q = u64::from(q);
    let mut d = 0u64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let diff = u64::from(x.scalar()).abs_diff(u64::from(y.scalar())) % q;
        d += diff.min(q - diff);
    }
    Ok(d as usize)
}

/// Lee distance over codepoint units with a q-ary alphabet.
///
/// The alphabet-size check precedes the length check, so `q < 2` is
/// reported even for unequal-length inputs.
///
/// # Example
/// ```
/// use strmetrics::algorithms::lee::lee_distance;
///
/// // '0' vs '9' wraps around the 10-symbol ring: min(9, 1) = 1
/// assert_eq!(lee_distance("0123", "9876", 10), Ok(12));
/// assert!(lee_distance("01", "10", 1).is_err());
/// ```
pub fn lee_distance(a: &str, b: &str, q: u32) -> Result<usize, MetricError> {
    let a_chars = char_units(a);
    let b_chars = char_units(b);
    lee_kernel(&a_chars, &b_chars, q)
}

/// Lee distance over raw byte units with a q-ary alphabet.
pub fn lee_distance_bytes(a: &str, b: &str, q: u32) -> Result<usize, MetricError> {
    lee_kernel(a.as_bytes(), b.as_bytes(), q)
}

/// Lee distance calculator (codepoint units) for a fixed alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lee {
    /// Size of the q-ary alphabet the unit values cycle over
    pub alphabet_size: u32,
}

impl Lee {
    #[must_use]
    pub fn new(alphabet_size: u32) -> Self {
        Self { alphabet_size }
    }
}

impl FallibleEditDistance for Lee {
    fn distance(&self, a: &str, b: &str) -> Result<usize, MetricError> {
        lee_distance(a, b, self.alphabet_size)
    }

    /// Circular distances can exceed the unit count, so the normalized
    /// score clamps at zero.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, MetricError> {
        self.distance(a, b).map(|dist| {
            let max_len = a.chars().count().max(b.chars().count());
            if max_len == 0 {
                1.0
            } else {
                (1.0 - dist as f64 / max_len as f64).max(0.0)
            }
        })
    }

    fn name(&self) -> &'static str {
        "lee"
    }
}
