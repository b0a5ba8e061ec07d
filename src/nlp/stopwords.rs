//! Stopword sets
//!
//! The summarizer treats stopwords as an opaque, read-only set of lowercase
//! strings supplied by the caller. [`StopwordFilter::for_language`] is a
//! caller-side convenience backed by the lists compiled into the `stop-words`
//! crate; nothing is ever downloaded.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A lowercase stopword set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty filter (every token is scored)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a filter from a custom list; words are lowercased
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        words.iter().collect()
    }

    /// Load the built-in list for a language
    ///
    /// Accepts ISO codes or English names (`"en"`, `"english"`, ...).
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Add stopwords to the set
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word: &str = word.as_ref();
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the set
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word: &str = word.as_ref();
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Check an already-lowercased word without allocating
    pub fn contains_lowercase(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the set
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            stopwords: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::for_language("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("cats"));
        assert!(!filter.is_stopword("mammals"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::for_language("klingon");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::for_language("german");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("katze"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Are", "and"]);

        assert!(filter.contains_lowercase("are"));
        assert!(!filter.contains_lowercase("Are"));
        assert!(filter.is_stopword("AND"));
        assert_eq!(filter.len(), 2);

        filter.add_stopwords(&["both"]);
        assert!(filter.is_stopword("both"));

        filter.remove_stopwords(&["AND"]);
        assert!(!filter.is_stopword("and"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_collect_from_owned_strings() {
        let words = vec!["The".to_string(), "a".to_string()];
        let filter: StopwordFilter = words.into_iter().collect();
        assert!(filter.contains_lowercase("the"));
        assert!(filter.contains_lowercase("a"));
    }
}
