//! Bag-of-words cosine similarity between sentences
//!
//! Each sentence becomes a sparse count vector over its lowercased tokens.
//! The vocabulary of a pair is the union of both sentences' tokens; stopwords
//! stay in the vocabulary but never add to a count, so storing only non-zero
//! counts gives the same dot products and norms as the dense vectors.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// A sparse term-count vector for one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountVector {
    /// Non-zero dimensions: lowercased token -> occurrence count
    pub counts: FxHashMap<String, u32>,
}

impl CountVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the count vector for a token sequence
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();

        for token in tokens {
            let token: &str = token.as_ref();
            let word = token.to_lowercase();
            if stopwords.contains_lowercase(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Build the count vector for a sentence
    pub fn from_sentence(sentence: &Sentence, stopwords: &StopwordFilter) -> Self {
        Self::from_tokens(&sentence.tokens, stopwords)
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &CountVector) -> u128 {
        // Iterate the smaller map; the sum is an integer so order doesn't matter.
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .filter_map(|(word, &count)| {
                large
                    .counts
                    .get(word)
                    .map(|&other_count| u128::from(count) * u128::from(other_count))
            })
            .sum()
    }

    /// Squared L2 norm
    pub fn norm_squared(&self) -> u128 {
        self.counts
            .values()
            .map(|&c| u128::from(c) * u128::from(c))
            .sum()
    }

    /// Cosine similarity with another vector
    ///
    /// Returns 0.0 when either vector is all-zero (every token was a stopword),
    /// where the cosine is otherwise undefined.
    pub fn cosine_similarity(&self, other: &CountVector) -> f64 {
        let norm_a = self.norm_squared() as f64;
        let norm_b = other.norm_squared() as f64;
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) as f64 / (norm_a.sqrt() * norm_b.sqrt())
    }

    /// Check if the vector is all-zero
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Similarity between two sentences: `1 - cosine_distance(v1, v2)`
pub fn sentence_similarity(a: &Sentence, b: &Sentence, stopwords: &StopwordFilter) -> f64 {
    let va = CountVector::from_sentence(a, stopwords);
    let vb = CountVector::from_sentence(b, stopwords);
    va.cosine_similarity(&vb)
}
