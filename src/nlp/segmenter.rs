//! Sentence segmentation
//!
//! Splits raw text on the literal `". "` boundary and tokenizes each fragment
//! on whitespace. This is a heuristic, not sentence-boundary detection: text
//! ending a sentence with `!` or `?` stays attached to the next sentence, and
//! abbreviations such as `"Dr. "` split early.

use crate::types::{Sentence, TokenNormalization};
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal sentence delimiter
pub const SENTENCE_DELIMITER: &str = ". ";

static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z]").expect("static pattern compiles"));

/// Splits text into tokenized sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    normalization: TokenNormalization,
}

impl Segmenter {
    /// Create a segmenter with the default (whitespace-only) normalization
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token normalization
    pub fn with_normalization(mut self, normalization: TokenNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Segment text into sentences
    ///
    /// Surrounding whitespace and a single terminal period are dropped first,
    /// since the assembler appends its own. Fragments with no tokens are
    /// skipped and the remaining sentences are indexed densely.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let text = text.trim();
        let text = text.strip_suffix('.').unwrap_or(text);

        text.split(SENTENCE_DELIMITER)
            .map(|fragment| self.tokenize(fragment))
            .filter(|tokens| !tokens.is_empty())
            .enumerate()
            .map(|(index, tokens)| Sentence::new(index, tokens))
            .collect()
    }

    /// Tokenize a single fragment
    pub fn tokenize(&self, fragment: &str) -> Vec<String> {
        match self.normalization {
            TokenNormalization::Whitespace => split_tokens(fragment),
            TokenNormalization::LettersOnly => {
                split_tokens(&NON_LETTER.replace_all(fragment, " "))
            }
        }
    }
}

fn split_tokens(fragment: &str) -> Vec<String> {
    fragment.split_whitespace().map(str::to_string).collect()
}

/// Convenience function to segment text with the given normalization
pub fn segment(text: &str, normalization: TokenNormalization) -> Vec<Sentence> {
    Segmenter::new().with_normalization(normalization).segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_of(sentences: &[Sentence]) -> Vec<Vec<&str>> {
        sentences
            .iter()
            .map(|s| s.tokens.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_single_letter_sentences() {
        let sentences = Segmenter::new().segment("A. B. C.");

        assert_eq!(sentences.len(), 3);
        assert_eq!(tokens_of(&sentences), vec![vec!["A"], vec!["B"], vec!["C"]]);
        assert!(sentences.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_indices_are_dense() {
        let sentences = Segmenter::new().segment("One two. . Three four. Five");

        assert_eq!(sentences.len(), 3);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
        }
    }

    #[test]
    fn test_empty_fragments_dropped() {
        let sentences = Segmenter::new().segment("First one.    . Second one");

        assert_eq!(
            tokens_of(&sentences),
            vec![vec!["First", "one"], vec!["Second", "one"]]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(Segmenter::new().segment("").is_empty());
        assert!(Segmenter::new().segment("   \n\t ").is_empty());
        assert!(Segmenter::new().segment(".").is_empty());
    }

    #[test]
    fn test_whitespace_keeps_punctuation() {
        let sentences = Segmenter::new().segment("Hello, world! How are you? Fine.");

        // Only ". " splits; "!" and "?" do not.
        assert_eq!(sentences.len(), 1);
        assert_eq!(
            sentences[0].tokens,
            vec!["Hello,", "world!", "How", "are", "you?", "Fine"]
        );
    }

    #[test]
    fn test_letters_only_strips_non_letters() {
        let segmenter = Segmenter::new().with_normalization(TokenNormalization::LettersOnly);
        let sentences = segmenter.segment("Hello, world! It's 2024. Done");

        assert_eq!(
            tokens_of(&sentences),
            vec![vec!["Hello", "world", "It", "s"], vec!["Done"]]
        );
    }

    #[test]
    fn test_letters_only_drops_numeric_fragment() {
        let sentences = segment("Alpha beta. 123 456. Gamma", TokenNormalization::LettersOnly);

        assert_eq!(tokens_of(&sentences), vec![vec!["Alpha", "beta"], vec!["Gamma"]]);
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_order_preserved() {
        let sentences = Segmenter::new().segment("z y. x w. v u");
        assert_eq!(
            tokens_of(&sentences),
            vec![vec!["z", "y"], vec!["x", "w"], vec!["v", "u"]]
        );
    }

    #[test]
    fn test_newlines_split_tokens() {
        let sentences = Segmenter::new().segment("Line one\nline two. Next");
        assert_eq!(sentences[0].tokens, vec!["Line", "one", "line", "two"]);
    }
}
