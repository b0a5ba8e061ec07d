//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the defaults are zero-sized.

use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::summarizer::similarity::CountVector;
use crate::types::{Sentence, SummarizerConfig};

// ============================================================================
// SentenceSimilarity: pairwise edge weights
// ============================================================================

/// Pairwise sentence similarity used as graph edge weight.
///
/// # Contract
///
/// - `vectorize` is called once per sentence; `score` once per unordered pair.
/// - `score(a, b) == score(b, a)` and the result is non-negative.
/// - `score` must return a finite value for degenerate vectors.
pub trait SentenceSimilarity: Sync {
    /// Per-sentence representation
    type Vector: Send + Sync;

    /// Build the representation of one sentence.
    fn vectorize(&self, sentence: &Sentence, stopwords: &StopwordFilter) -> Self::Vector;

    /// Score a pair of representations.
    fn score(&self, a: &Self::Vector, b: &Self::Vector) -> f64;
}

/// Bag-of-words cosine similarity over lowercased, stopword-filtered counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl SentenceSimilarity for CosineSimilarity {
    type Vector = CountVector;

    #[inline]
    fn vectorize(&self, sentence: &Sentence, stopwords: &StopwordFilter) -> CountVector {
        CountVector::from_sentence(sentence, stopwords)
    }

    #[inline]
    fn score(&self, a: &CountVector, b: &CountVector) -> f64 {
        a.cosine_similarity(b)
    }
}

// ============================================================================
// Ranker: node importance over the sentence graph
// ============================================================================

/// Computes per-node importance over a sentence graph.
pub trait Ranker {
    /// Rank the graph's nodes. Scores are indexed by node (= sentence index).
    fn rank(&self, graph: &CsrGraph, cfg: &SummarizerConfig) -> PageRankResult;
}

/// Weighted PageRank with damping, tolerance and iteration cap from the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRankRanker;

impl Ranker for PageRankRanker {
    fn rank(&self, graph: &CsrGraph, cfg: &SummarizerConfig) -> PageRankResult {
        StandardPageRank::new()
            .with_damping(cfg.damping)
            .with_max_iterations(cfg.max_iterations)
            .with_threshold(cfg.convergence_threshold)
            .run(graph)
    }
}
