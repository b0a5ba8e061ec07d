//! Core types for rapid_summarizer
//!
//! This module defines the data structures shared by every stage:
//! sentences, score maps, and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence produced by the segmenter
///
/// Identity is the position `index` in the segmented document. Token order is
/// preserved so the sentence can be reassembled verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position of the sentence in the document
    pub index: usize,
    /// Word tokens in original order (never empty)
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(index: usize, tokens: Vec<String>) -> Self {
        Self { index, tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rejoin the tokens with single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

// ============================================================================
// Score Map
// ============================================================================

/// Importance score per sentence, indexed by sentence index
///
/// For a non-empty document the scores form a probability distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    scores: Vec<f64>,
}

impl ScoreMap {
    /// Wrap a score vector
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score for a sentence (0.0 when out of range)
    pub fn get(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Iterate over `(index, score)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().copied().enumerate()
    }

    /// Borrow the raw scores
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}

// ============================================================================
// Summary
// ============================================================================

/// A selected sentence with its rank score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    /// The selected sentence
    pub sentence: Sentence,
    /// Its importance score
    pub score: f64,
}

/// Final summarization output
///
/// `sentences` are in rank order (most important first), not document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences, most important first
    pub sentences: Vec<RankedSentence>,
    /// Rendered summary text
    pub text: String,
    /// Whether PageRank converged before the iteration cap
    pub converged: bool,
    /// PageRank iterations performed
    pub iterations: usize,
}

impl Summary {
    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary is empty
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// How fragment text is cleaned before whitespace tokenization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenNormalization {
    /// Split on whitespace only; punctuation stays attached to words
    #[default]
    Whitespace,
    /// Replace every character outside `[a-zA-Z]` with a space first
    LettersOnly,
}

/// Ordering applied when two sentences have exactly equal scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Greater token sequence first (reverse-sorted `(score, tokens)` pairs)
    #[default]
    Lexicographic,
    /// Earlier sentence first
    Position,
}

/// What to do when more sentences are requested than exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopNPolicy {
    /// Return every sentence
    #[default]
    Clamp,
    /// Fail with [`SummarizeError::InsufficientSentences`]
    Strict,
}

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Number of sentences in the summary
    pub top_n: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Per-node convergence tolerance
    pub convergence_threshold: f64,
    /// Token cleanup applied by the segmenter
    pub normalization: TokenNormalization,
    /// Ordering of equally scored sentences
    pub tie_break: TieBreak,
    /// Handling of `top_n` larger than the sentence count
    pub top_n_policy: TopNPolicy,
    /// Sentence count at which the similarity matrix is built in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            normalization: TokenNormalization::Whitespace,
            tie_break: TieBreak::Lexicographic,
            top_n_policy: TopNPolicy::Clamp,
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and validate it
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(SummarizeError::invalid_config("top_n must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set the number of summary sentences
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set token normalization
    pub fn with_normalization(mut self, normalization: TokenNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Builder method: set tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder method: set top-n overflow policy
    pub fn with_top_n_policy(mut self, policy: TopNPolicy) -> Self {
        self.top_n_policy = policy;
        self
    }

    /// Builder method: set parallel matrix threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
