//! # rapid_summarizer
//!
//! Extractive text summarization with sentence-level TextRank.
//!
//! Sentences are compared pairwise with bag-of-words cosine similarity, the
//! resulting similarity graph is ranked with weighted PageRank, and the
//! highest-ranked sentences are returned in rank order.
//!
//! ## Quick start
//!
//! ```
//! use rapid_summarizer::{summarize, StopwordFilter};
//!
//! let text = "Cats are popular pets. Dogs are loyal companions. \
//!             Cats and dogs are both mammals.";
//! let stopwords = StopwordFilter::from_list(&["are", "and", "both"]);
//!
//! let summary = summarize(text, &stopwords, 2).unwrap();
//! assert!(summary.starts_with("Cats and dogs are both mammals. "));
//! ```
//!
//! The core is pure: no I/O, no global state, stopwords are injected.

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    RankedSentence, ScoreMap, Sentence, Summary, SummarizerConfig, TieBreak, TokenNormalization,
    TopNPolicy,
};

// Re-export main functionality
pub use graph::{builder::SentenceGraphBuilder, csr::CsrGraph};
pub use nlp::{segmenter::Segmenter, stopwords::StopwordFilter};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{NoopObserver, Pipeline, PipelineBuilder, TextRankPipeline};
pub use summarizer::{
    matrix::SimilarityMatrix, ranker::SentenceRanker, selector::SentenceSelector,
    similarity::sentence_similarity,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` into its `top_n` most central sentences.
///
/// Uses the default configuration otherwise: whitespace tokenization,
/// PageRank with damping 0.85, lexicographic tie-break, and `top_n` clamped
/// to the number of sentences.
pub fn summarize(text: &str, stopwords: &StopwordFilter, top_n: usize) -> Result<String> {
    let config = SummarizerConfig::default().with_top_n(top_n);
    Ok(summarize_with_config(text, stopwords, &config)?.text)
}

/// Summarize `text` with an explicit configuration.
pub fn summarize_with_config(
    text: &str,
    stopwords: &StopwordFilter,
    config: &SummarizerConfig,
) -> Result<Summary> {
    TextRankPipeline::textrank().run(text, stopwords, config, &mut NoopObserver)
}
