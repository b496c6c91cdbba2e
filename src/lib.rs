//! strmetrics - string similarity and edit-distance metrics
//!
//! Exact-position distances (Hamming, Lee), bigram-overlap similarities
//! (Dice coefficient, White similarity), dynamic-programming edit distances
//! (Levenshtein, Damerau-Levenshtein with adjacent transpositions), and
//! alignment similarities (Jaro, Jaro-Winkler).
//!
//! # Granularity
//!
//! Every metric exists in two forms sharing one generic kernel:
//!
//! - the base name compares **codepoints**, decoding each input once per
//!   call, so one unit is one user-perceived character for typical text;
//! - the `_bytes` suffix compares **raw bytes** straight from the string's
//!   storage, an O(1) reinterpretation suited to single-byte-per-character
//!   data.
//!
//! The forms agree on ASCII and diverge on multi-byte text; the per-module
//! tests pin down the differences. Levenshtein and the Jaro family also
//! offer grapheme-cluster variants for emoji and combining sequences.
//!
//! # Errors
//!
//! Metrics with preconditions return `Result<_, MetricError>`; a failure
//! means the metric is undefined for those inputs, not that they are
//! dissimilar. Jaro and Jaro-Winkler have no failure mode - empty input
//! legitimately scores `0.0`.
//!
//! # Example
//!
//! ```
//! use strmetrics::{hamming_distance, jaro_winkler_similarity, levenshtein};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(hamming_distance("toned", "roses"), Ok(3));
//! assert!(jaro_winkler_similarity("martha", "marhta") > 0.96);
//! ```

pub mod algorithms;

pub use algorithms::{
    damerau_levenshtein, damerau_levenshtein_bytes, damerau_levenshtein_similarity,
    dice_coefficient, dice_coefficient_bytes, hamming_distance, hamming_distance_bytes,
    hamming_similarity, jaro_distance, jaro_similarity, jaro_similarity_bytes,
    jaro_similarity_grapheme, jaro_winkler_distance, jaro_winkler_similarity,
    jaro_winkler_similarity_bytes, jaro_winkler_similarity_bytes_params,
    jaro_winkler_similarity_grapheme, jaro_winkler_similarity_params, lee_distance,
    lee_distance_bytes, levenshtein, levenshtein_bytes, levenshtein_grapheme,
    levenshtein_similarity, levenshtein_simd, white_similarity, white_similarity_bytes,
    DamerauLevenshtein, Dice, EditDistance, FallibleEditDistance, FallibleSimilarity, Hamming,
    Jaro, JaroWinkler, JaroWinklerConfig, Lee, Levenshtein, MetricError, Similarity, White,
};

/// Minimum input size for parallel batch processing.
///
/// Below this threshold sequential scoring is faster than paying the
/// thread-pool coordination overhead.
const PARALLEL_THRESHOLD: usize = 100;

/// Score two equal-length slices element-wise with the given metric.
///
/// Falls back to sequential iteration for small inputs and fails with
/// [`MetricError::LengthMismatch`] when the slices differ in length.
///
/// # Example
/// ```
/// use strmetrics::{pairwise_similarity, Jaro};
///
/// let left = ["hello", "world"];
/// let right = ["hallo", "world"];
/// let scores = pairwise_similarity(&left, &right, &Jaro::new()).unwrap();
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores[1], 1.0);
/// ```
pub fn pairwise_similarity<S: AsRef<str> + Sync>(
    left: &[S],
    right: &[S],
    metric: &dyn Similarity,
) -> Result<Vec<f64>, MetricError> {
    if left.len() != right.len() {
        return Err(MetricError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    if left.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        Ok(left
            .par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| metric.similarity(a.as_ref(), b.as_ref()))
            .collect())
    } else {
        Ok(left
            .iter()
            .zip(right.iter())
            .map(|(a, b)| metric.similarity(a.as_ref(), b.as_ref()))
            .collect())
    }
}

/// Score every query against every choice with the given metric.
///
/// Returns one row per query. Rows are scored in parallel once the output
/// size reaches the parallel threshold.
pub fn similarity_matrix<S: AsRef<str> + Sync>(
    queries: &[S],
    choices: &[S],
    metric: &dyn Similarity,
) -> Vec<Vec<f64>> {
    let score_row = |q: &S| -> Vec<f64> {
        choices
            .iter()
            .map(|c| metric.similarity(q.as_ref(), c.as_ref()))
            .collect()
    };

    if queries.len().saturating_mul(choices.len()) >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        queries.par_iter().map(score_row).collect()
    } else {
        queries.iter().map(score_row).collect()
    }
}

/// Look up a similarity metric by name.
///
/// Covers the metrics that score any pair of inputs through the
/// [`Similarity`] trait; parametrized metrics (Lee) and the `Result`
/// surfaces are only reachable through their own types.
pub fn similarity_by_name(name: &str) -> Option<Box<dyn Similarity>> {
    match name {
        "levenshtein" => Some(Box::new(Levenshtein::new())),
        "damerau_levenshtein" | "damerau" => Some(Box::new(DamerauLevenshtein::new())),
        "jaro" => Some(Box::new(Jaro::new())),
        "jaro_winkler" => Some(Box::new(JaroWinkler::new())),
        "hamming" => Some(Box::new(Hamming::new())),
        "dice" => Some(Box::new(Dice::new())),
        "white" => Some(Box::new(White::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairwise_matches_scalar_calls() {
        let left = ["kitten", "martha", "night"];
        let right = ["sitting", "marhta", "nacht"];
        let jaro = Jaro::new();

        let scores = pairwise_similarity(&left, &right, &jaro).unwrap();
        assert_eq!(scores.len(), 3);
        for ((a, b), score) in left.iter().zip(right.iter()).zip(scores.iter()) {
            assert_eq!(*score, jaro_similarity(a, b));
        }
    }

    #[test]
    fn test_pairwise_length_mismatch() {
        let left = ["a", "b"];
        let right = ["a"];
        assert_eq!(
            pairwise_similarity(&left, &right, &Jaro::new()),
            Err(MetricError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_pairwise_parallel_path() {
        // enough pairs to cross the parallel threshold
        let left: Vec<String> = (0..150).map(|i| format!("string number {i}")).collect();
        let right: Vec<String> = (0..150).map(|i| format!("string numbre {i}")).collect();
        let jw = JaroWinkler::new();

        let scores = pairwise_similarity(&left, &right, &jw).unwrap();
        assert_eq!(scores.len(), 150);
        for (i, score) in scores.iter().enumerate() {
            assert_eq!(*score, jw.similarity(&left[i], &right[i]));
            assert!(*score > 0.9);
        }
    }

    #[test]
    fn test_similarity_matrix_shape_and_values() {
        let queries = ["night", "kitten"];
        let choices = ["nacht", "sitting", "night"];
        let lev = Levenshtein::new();

        let matrix = similarity_matrix(&queries, &choices, &lev);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].len(), 3);
        assert_eq!(matrix[0][2], 1.0);
        assert_eq!(
            matrix[1][1],
            Similarity::similarity(&lev, "kitten", "sitting")
        );
    }

    #[test]
    fn test_similarity_by_name_dispatch() {
        for name in [
            "levenshtein",
            "damerau_levenshtein",
            "damerau",
            "jaro",
            "jaro_winkler",
            "hamming",
            "dice",
            "white",
        ] {
            let metric = similarity_by_name(name).unwrap();
            assert_eq!(metric.similarity("same", "same"), 1.0);
        }
        assert!(similarity_by_name("soundex").is_none());
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(levenshtein("kitten", "sitting"), 3);
            assert_eq!(dice_coefficient("night", "nacht"), Ok(0.25));
            assert_eq!(
                jaro_winkler_similarity("martha", "marhta"),
                jaro_winkler_similarity("martha", "marhta")
            );
        }
    }
}
