//! Jaro and Jaro-Winkler similarity implementations
//!
//! Bounded-window common-unit search plus transposition counting.
//! Jaro-Winkler adds a prefix bonus for strings that already score above a
//! boost threshold, which suits name matching and short identifiers.
//!
//! An empty input on either side scores `0.0` by the formula itself (the
//! match count is necessarily zero); this is a correct result, not an
//! error.
//!
//! # Performance
//!
//! The codepoint form takes an ASCII fast path that runs the kernel
//! directly over bytes, avoiding the decode when both inputs are ASCII.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::units::char_units;
use super::Similarity;

/// Prefix bonus per matching leading unit.
pub const DEFAULT_PREFIX_SCALE: f64 = 0.1;
/// Longest common prefix the bonus considers.
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;
/// Minimum Jaro score before the prefix bonus applies.
pub const DEFAULT_BOOST_THRESHOLD: f64 = 0.7;

/// Jaro kernel for any comparable unit slice.
///
/// # Complexity
/// - Time: O(m*n) for the windowed matching
/// - Space: O(m+n) for the match flags
fn jaro_kernel<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // Units may only match within this distance of their own index
    let match_window = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk the matched units of both sides in order; aligned positions
    // holding different units are half-transpositions.
    let mut half_transpositions = 0usize;
    let mut k = 0usize;
    for i in 0..a_len {
        if !a_matched[i] {
            continue;
        }
        while k < b_len && !b_matched[k] {
            k += 1;
        }
        if k >= b_len {
            break;
        }
        if a[i] != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Jaro similarity over codepoint units. Returns a value in [0.0, 1.0];
/// `0.0` whenever either input is empty.
///
/// # Example
/// ```
/// use strmetrics::algorithms::jaro::jaro_similarity;
///
/// assert_eq!(jaro_similarity("", ""), 0.0);
/// assert_eq!(jaro_similarity("martha", "martha"), 1.0);
/// assert!((jaro_similarity("martha", "marhta") - 0.9444).abs() < 0.0001);
/// ```
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    // ASCII bytes and codepoints coincide, so skip the decode
    if a.is_ascii() && b.is_ascii() {
        return jaro_kernel(a.as_bytes(), b.as_bytes());
    }

    jaro_kernel(&char_units(a), &char_units(b))
}

/// Jaro similarity over raw byte units.
#[must_use]
pub fn jaro_similarity_bytes(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    jaro_kernel(a.as_bytes(), b.as_bytes())
}

fn winkler_boost(jaro: f64, prefix_len: usize, prefix_scale: f64, boost_threshold: f64) -> f64 {
    if jaro < boost_threshold {
        return jaro;
    }
    jaro + prefix_len as f64 * prefix_scale * (1.0 - jaro)
}

fn common_prefix_chars(a: &str, b: &str, cap: usize) -> usize {
    a.chars()
        .zip(b.chars())
        .take(cap)
        .take_while(|(x, y)| x == y)
        .count()
}

fn common_prefix_bytes(a: &str, b: &str, cap: usize) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take(cap)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Jaro-Winkler similarity over codepoint units with caller-supplied
/// parameters.
///
/// The prefix bonus only applies when the base Jaro score reaches
/// `boost_threshold`; below it the Jaro score is returned unchanged. To
/// keep the result within [0.0, 1.0], `prefix_scale * max_prefix_length`
/// should stay within [0, 1].
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_params(
    a: &str,
    b: &str,
    prefix_scale: f64,
    max_prefix_length: usize,
    boost_threshold: f64,
) -> f64 {
    let jaro = jaro_similarity(a, b);
    winkler_boost(
        jaro,
        common_prefix_chars(a, b, max_prefix_length),
        prefix_scale,
        boost_threshold,
    )
}

/// Jaro-Winkler similarity over raw byte units with caller-supplied
/// parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_bytes_params(
    a: &str,
    b: &str,
    prefix_scale: f64,
    max_prefix_length: usize,
    boost_threshold: f64,
) -> f64 {
    let jaro = jaro_similarity_bytes(a, b);
    winkler_boost(
        jaro,
        common_prefix_bytes(a, b, max_prefix_length),
        prefix_scale,
        boost_threshold,
    )
}

/// Jaro-Winkler similarity over codepoint units with the standard
/// parameters (scale 0.1, prefix cap 4, boost threshold 0.7).
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_params(
        a,
        b,
        DEFAULT_PREFIX_SCALE,
        DEFAULT_MAX_PREFIX_LENGTH,
        DEFAULT_BOOST_THRESHOLD,
    )
}

/// Jaro-Winkler similarity over raw byte units with the standard
/// parameters.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity_bytes(a: &str, b: &str) -> f64 {
    jaro_winkler_similarity_bytes_params(
        a,
        b,
        DEFAULT_PREFIX_SCALE,
        DEFAULT_MAX_PREFIX_LENGTH,
        DEFAULT_BOOST_THRESHOLD,
    )
}

/// Distance version (1.0 - similarity)
#[inline]
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

#[inline]
#[must_use]
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}

/// Jaro similarity calculator (codepoint units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JaroWinklerConfig {
    /// Prefix bonus per matching leading unit (typically 0.1, max 0.25)
    pub prefix_scale: f64,
    /// Longest common prefix the bonus considers (typically 4)
    pub max_prefix_length: usize,
    /// Minimum Jaro score before the bonus applies (typically 0.7)
    pub boost_threshold: f64,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_scale: DEFAULT_PREFIX_SCALE,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
            boost_threshold: DEFAULT_BOOST_THRESHOLD,
        }
    }
}

/// Jaro-Winkler similarity calculator (codepoint units).
#[derive(Debug, Clone, PartialEq)]
pub struct JaroWinkler {
    /// Prefix bonus per matching leading unit
    pub prefix_scale: f64,
    /// Longest common prefix the bonus considers
    pub max_prefix_length: usize,
    /// Minimum Jaro score before the bonus applies
    pub boost_threshold: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self {
            prefix_scale: config.prefix_scale.clamp(0.0, 0.25),
            max_prefix_length: config.max_prefix_length,
            boost_threshold: config.boost_threshold,
        }
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            prefix_scale: self.prefix_scale,
            max_prefix_length: self.max_prefix_length,
            boost_threshold: self.boost_threshold,
        }
    }

    /// Scale is clamped to [0.0, 0.25] so a full four-unit prefix cannot
    /// push the score past 1.0.
    #[must_use]
    pub fn with_prefix_scale(mut self, scale: f64) -> Self {
        self.prefix_scale = scale.clamp(0.0, 0.25);
        self
    }

    #[must_use]
    pub fn with_max_prefix_length(mut self, length: usize) -> Self {
        self.max_prefix_length = length;
        self
    }

    #[must_use]
    pub fn with_boost_threshold(mut self, threshold: f64) -> Self {
        self.boost_threshold = threshold;
        self
    }
}

impl Similarity for JaroWinkler {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_winkler_similarity_params(
            a,
            b,
            self.prefix_scale,
            self.max_prefix_length,
            self.boost_threshold,
        )
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

// ============================================================================
// Grapheme Cluster Mode
// ============================================================================

use unicode_segmentation::UnicodeSegmentation;

/// Jaro similarity treating grapheme clusters as single units.
#[must_use]
pub fn jaro_similarity_grapheme(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let a_graphemes: SmallVec<[&str; 64]> = a.graphemes(true).collect();
    let b_graphemes: SmallVec<[&str; 64]> = b.graphemes(true).collect();
    jaro_kernel(&a_graphemes, &b_graphemes)
}

/// Jaro-Winkler similarity treating grapheme clusters as single units,
/// with the standard parameters.
#[must_use]
pub fn jaro_winkler_similarity_grapheme(a: &str, b: &str) -> f64 {
    let jaro = jaro_similarity_grapheme(a, b);
    let prefix_len = a
        .graphemes(true)
        .zip(b.graphemes(true))
        .take(DEFAULT_MAX_PREFIX_LENGTH)
        .take_while(|(x, y)| x == y)
        .count();
    winkler_boost(jaro, prefix_len, DEFAULT_PREFIX_SCALE, DEFAULT_BOOST_THRESHOLD)
}
