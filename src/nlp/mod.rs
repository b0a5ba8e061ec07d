//! Natural Language Processing components
//!
//! This module provides sentence segmentation and stopword sets.

pub mod segmenter;
pub mod stopwords;
