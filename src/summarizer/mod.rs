//! Summarization components
//!
//! Provides extractive summarization by sentence centrality: pairwise
//! cosine similarity, PageRank over the similarity graph, and top-N
//! selection.

pub mod matrix;
pub mod ranker;
pub mod selector;
pub mod similarity;
