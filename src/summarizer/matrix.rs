//! Pairwise sentence similarity matrix
//!
//! The matrix is square, symmetric and has a zero diagonal: a sentence is
//! never scored against itself. Each sentence is vectorized once and each
//! unordered pair is scored once, then mirrored.

use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::traits::SentenceSimilarity;
use crate::types::Sentence;
use rayon::prelude::*;

/// Sentence count at which the matrix is built in parallel by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Dense row-major `n × n` similarity matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Create from explicit rows
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|r| r.len() == n),
            "similarity matrix must be square"
        );
        Self {
            n,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Build the matrix for a list of sentences
    ///
    /// Scoring is parallelized across pairs when there are at least
    /// `parallel_threshold` sentences. Each cell is written exactly once, so
    /// both paths produce identical matrices.
    pub fn build<S: SentenceSimilarity>(
        sentences: &[Sentence],
        stopwords: &StopwordFilter,
        similarity: &S,
        parallel_threshold: usize,
    ) -> Self {
        let n = sentences.len();
        let mut matrix = Self::zeros(n);
        if n < 2 {
            return matrix;
        }

        let parallel = n >= parallel_threshold;

        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = n, parallel, "building similarity matrix");

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        let scores: Vec<f64> = if parallel {
            let vectors: Vec<S::Vector> = sentences
                .par_iter()
                .map(|s| similarity.vectorize(s, stopwords))
                .collect();
            pairs
                .par_iter()
                .map(|&(i, j)| similarity.score(&vectors[i], &vectors[j]))
                .collect()
        } else {
            let vectors: Vec<S::Vector> = sentences
                .iter()
                .map(|s| similarity.vectorize(s, stopwords))
                .collect();
            pairs
                .iter()
                .map(|&(i, j)| similarity.score(&vectors[i], &vectors[j]))
                .collect()
        };

        for (&(i, j), score) in pairs.iter().zip(scores) {
            matrix.values[i * n + j] = score;
            matrix.values[j * n + i] = score;
        }

        matrix
    }

    /// Value at `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Borrow row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Dimension of the matrix
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Check symmetry within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }

    /// Check that every diagonal entry is zero
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.n).all(|i| self.get(i, i) == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::segmenter::Segmenter;
    use crate::pipeline::traits::CosineSimilarity;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn pets() -> Vec<Sentence> {
        Segmenter::new().segment(
            "Cats are popular pets. Dogs are loyal companions. Cats and dogs are both mammals.",
        )
    }

    fn stopwords() -> StopwordFilter {
        StopwordFilter::from_list(&["are", "and", "both"])
    }

    #[test]
    fn test_pets_matrix() {
        let matrix = SimilarityMatrix::build(&pets(), &stopwords(), &CosineSimilarity, 64);

        assert_eq!(matrix.len(), 3);
        assert!(matrix.is_symmetric(0.0));
        assert!(matrix.has_zero_diagonal());

        // "Cats popular pets" vs "Dogs loyal companions": nothing shared.
        assert_eq!(matrix.get(0, 1), 0.0);
        // {cats, popular, pets} vs {cats, dogs, mammals}: 1 / 3
        assert!((matrix.get(0, 2) - 1.0 / 3.0).abs() < 1e-12);
        assert!((matrix.get(1, 2) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = (0..40)
            .map(|i| format!("topic{} shared words number{} extra{}", i % 5, i % 7, i))
            .collect::<Vec<_>>()
            .join(". ");
        let sentences = Segmenter::new().segment(&text);

        let sequential =
            SimilarityMatrix::build(&sentences, &StopwordFilter::empty(), &CosineSimilarity, 1000);
        let parallel =
            SimilarityMatrix::build(&sentences, &StopwordFilter::empty(), &CosineSimilarity, 1);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_self_pairs_never_scored() {
        struct Counting {
            calls: AtomicUsize,
        }

        impl SentenceSimilarity for Counting {
            type Vector = usize;

            fn vectorize(&self, sentence: &Sentence, _stopwords: &StopwordFilter) -> usize {
                sentence.index
            }

            fn score(&self, a: &usize, b: &usize) -> f64 {
                assert_ne!(a, b, "sentence compared with itself");
                self.calls.fetch_add(1, Ordering::SeqCst);
                1.0
            }
        }

        let counting = Counting {
            calls: AtomicUsize::new(0),
        };
        let matrix = SimilarityMatrix::build(&pets(), &stopwords(), &counting, 64);

        // 3 sentences -> 3 unordered pairs
        assert_eq!(counting.calls.load(Ordering::SeqCst), 3);
        assert!(matrix.has_zero_diagonal());
    }

    #[test]
    fn test_small_inputs() {
        let empty = SimilarityMatrix::build(&[], &stopwords(), &CosineSimilarity, 64);
        assert!(empty.is_empty());

        let single = Segmenter::new().segment("Only one sentence");
        let matrix = SimilarityMatrix::build(&single, &stopwords(), &CosineSimilarity, 64);
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.row(0), &[0.0]);
    }

    #[test]
    fn test_from_rows() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![0.0, 0.2], vec![0.2, 0.0]]);
        assert_eq!(matrix.row(1), &[0.2, 0.0]);
        assert!(matrix.is_symmetric(1e-12));
    }
}
