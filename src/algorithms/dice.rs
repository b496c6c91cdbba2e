//! Sørensen-Dice coefficient over adjacent-unit bigrams.
//!
//! Set-based variant: bigram multiplicity is ignored, so `"GG"` and
//! `"GGGG"` (bigram sets `{GG}` and `{GG}`) score a perfect 1.0 despite
//! their different lengths. This is a documented limitation of the metric,
//! not a defect; [`white_similarity`](super::white::white_similarity) is
//! the multiplicity- and whitespace-aware relative.
//!
//! # Complexity
//! - Time: O(m + n) expected, via hashed bigram sets
//! - Space: O(m + n) for the two sets

use ahash::AHashSet;
use std::hash::Hash;

use super::units::char_units;
use super::{FallibleSimilarity, MetricError, Similarity};

/// Shared/total bigram ratio over distinct adjacent pairs.
///
/// The union denominator counts each side's distinct bigrams separately;
/// a bigram present in both sets contributes twice, matching the
/// `2 * shared / (|A| + |B|)` form of the coefficient.
fn dice_kernel<U: Copy + Eq + Hash>(a: &[U], b: &[U]) -> Result<f64, MetricError> {
    if a.len() < 2 && b.len() < 2 {
        return Err(MetricError::InsufficientLength);
    }

    let mut a_set: AHashSet<(U, U)> = AHashSet::with_capacity(a.len().saturating_sub(1));
    let mut total = 0usize;
    for w in a.windows(2) {
        if a_set.insert((w[0], w[1])) {
            total += 1;
        }
    }

    let mut b_set: AHashSet<(U, U)> = AHashSet::with_capacity(b.len().saturating_sub(1));
    let mut shared = 0usize;
    for w in b.windows(2) {
        let bigram = (w[0], w[1]);
        if b_set.insert(bigram) {
            total += 1;
            if a_set.contains(&bigram) {
                shared += 1;
            }
        }
    }

    Ok(2.0 * shared as f64 / total as f64)
}

/// Dice coefficient over codepoint units.
///
/// Fails with [`MetricError::InsufficientLength`] when both inputs contain
/// fewer than two units; a length-0 or length-1 input contributes no
/// bigrams of its own but is fine as long as the other side has some.
///
/// # Example
/// ```
/// use strmetrics::algorithms::dice::dice_coefficient;
///
/// assert_eq!(dice_coefficient("night", "nacht"), Ok(0.25));
/// assert_eq!(dice_coefficient("GGGG", "GGGG"), Ok(1.0));
/// assert!(dice_coefficient("a", "b").is_err());
/// ```
pub fn dice_coefficient(a: &str, b: &str) -> Result<f64, MetricError> {
    let a_chars = char_units(a);
    let b_chars = char_units(b);
    dice_kernel(&a_chars, &b_chars)
}

/// Dice coefficient over raw byte units.
///
/// A single multi-byte codepoint already spans several byte bigrams, so
/// inputs that fail the codepoint form for lack of bigrams can succeed
/// here.
pub fn dice_coefficient_bytes(a: &str, b: &str) -> Result<f64, MetricError> {
    dice_kernel(a.as_bytes(), b.as_bytes())
}

/// Dice coefficient calculator (codepoint units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dice;

impl Dice {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FallibleSimilarity for Dice {
    fn similarity(&self, a: &str, b: &str) -> Result<f64, MetricError> {
        dice_coefficient(a, b)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Inputs without bigrams score `0.0` here rather than failing. Use
/// [`FallibleSimilarity`] to distinguish "undefined" from "no similarity".
impl Similarity for Dice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        FallibleSimilarity::similarity(self, a, b).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}
