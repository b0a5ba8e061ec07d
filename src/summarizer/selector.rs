//! Top-N sentence selection and summary assembly
//!
//! Sentences are ordered by score, highest first, and the leading `top_n`
//! are rejoined into text. The summary follows rank order, not document
//! order.

use crate::errors::{Result, SummarizeError};
use crate::types::{RankedSentence, ScoreMap, Sentence, SummarizerConfig, TieBreak, TopNPolicy};
use std::cmp::Ordering;

/// Separator placed between summary sentences
pub const SUMMARY_SEPARATOR: &str = ". ";

/// Configuration for sentence selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub top_n: usize,
    /// Ordering of equally scored sentences
    pub tie_break: TieBreak,
    /// Handling of `top_n` larger than the sentence count
    pub policy: TopNPolicy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            tie_break: TieBreak::Lexicographic,
            policy: TopNPolicy::Clamp,
        }
    }
}

impl From<&SummarizerConfig> for SelectorConfig {
    fn from(config: &SummarizerConfig) -> Self {
        Self {
            top_n: config.top_n,
            tie_break: config.tie_break,
            policy: config.top_n_policy,
        }
    }
}

/// Rank-ordered sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.config.top_n = n;
        self
    }

    /// Set the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Set the overflow policy
    pub fn with_policy(mut self, policy: TopNPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Order sentence positions by score, highest first
    ///
    /// With [`TieBreak::Lexicographic`], exactly equal scores put the greater
    /// token sequence first. Fully identical entries keep document order.
    pub fn order(&self, sentences: &[Sentence], scores: &ScoreMap) -> Vec<usize> {
        let mut order: Vec<usize> = (0..sentences.len()).collect();

        order.sort_by(|&a, &b| {
            let by_score = scores
                .get(sentences[b].index)
                .total_cmp(&scores.get(sentences[a].index));
            if by_score != Ordering::Equal {
                return by_score;
            }

            match self.config.tie_break {
                TieBreak::Lexicographic => sentences[b].tokens.cmp(&sentences[a].tokens),
                TieBreak::Position => sentences[a].index.cmp(&sentences[b].index),
            }
        });

        order
    }

    /// Select the top sentences in rank order
    pub fn select(&self, sentences: &[Sentence], scores: &ScoreMap) -> Result<Vec<RankedSentence>> {
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        if self.config.top_n == 0 {
            return Err(SummarizeError::invalid_config("top_n must be > 0"));
        }

        let available = sentences.len();
        if self.config.top_n > available && self.config.policy == TopNPolicy::Strict {
            return Err(SummarizeError::InsufficientSentences {
                requested: self.config.top_n,
                available,
            });
        }

        let selected: Vec<RankedSentence> = self
            .order(sentences, scores)
            .into_iter()
            .take(self.config.top_n)
            .map(|i| RankedSentence {
                sentence: sentences[i].clone(),
                score: scores.get(sentences[i].index),
            })
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            requested = self.config.top_n,
            selected = selected.len(),
            available,
            "selected summary sentences"
        );

        Ok(selected)
    }

    /// Select and render the summary text
    pub fn summarize(&self, sentences: &[Sentence], scores: &ScoreMap) -> Result<String> {
        let selected = self.select(sentences, scores)?;
        Ok(assemble(&selected))
    }
}

/// Join selected sentences: tokens with spaces, sentences with `". "`, then a final `"."`
pub fn assemble(selected: &[RankedSentence]) -> String {
    let mut text = selected
        .iter()
        .map(|s| s.sentence.text())
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR);
    text.push('.');
    text
}

/// Convenience function: select `top_n` sentences with default rules and render them
pub fn select(sentences: &[Sentence], scores: &ScoreMap, top_n: usize) -> Result<String> {
    SentenceSelector::new()
        .with_top_n(top_n)
        .summarize(sentences, scores)
}
