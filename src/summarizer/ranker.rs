//! Sentence ranking
//!
//! Builds the similarity matrix, turns it into a weighted sentence graph and
//! scores every sentence with PageRank.

use crate::errors::Result;
use crate::graph::builder::SentenceGraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::traits::{CosineSimilarity, PageRankRanker, Ranker};
use crate::summarizer::matrix::SimilarityMatrix;
use crate::types::{ScoreMap, Sentence, SummarizerConfig};

/// Scores plus convergence information
#[derive(Debug, Clone)]
pub struct RankOutput {
    /// Importance per sentence
    pub scores: ScoreMap,
    /// PageRank iterations performed (0 when ranking was trivial)
    pub iterations: usize,
    /// Final L1 change between the last two iterations
    pub delta: f64,
    /// Whether PageRank converged
    pub converged: bool,
}

/// Score the nodes of a sentence graph
///
/// Graphs with fewer than two nodes have no meaningful ranking: an empty
/// graph yields an empty map and a single sentence gets the whole mass.
pub fn rank_graph<R: Ranker>(graph: &CsrGraph, ranker: &R, cfg: &SummarizerConfig) -> RankOutput {
    match graph.num_nodes {
        0 => RankOutput {
            scores: ScoreMap::default(),
            iterations: 0,
            delta: 0.0,
            converged: true,
        },
        1 => RankOutput {
            scores: ScoreMap::new(vec![1.0]),
            iterations: 0,
            delta: 0.0,
            converged: true,
        },
        _ => {
            let result = ranker.rank(graph, cfg);
            RankOutput {
                scores: ScoreMap::new(result.scores),
                iterations: result.iterations,
                delta: result.delta,
                converged: result.converged,
            }
        }
    }
}

/// Ranks sentences by centrality in the similarity graph
#[derive(Debug, Clone, Default)]
pub struct SentenceRanker {
    config: SummarizerConfig,
}

impl SentenceRanker {
    /// Create a ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    ///
    /// The config is validated here so that ranking itself cannot fail.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Score every sentence
    pub fn rank(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> ScoreMap {
        self.rank_with_info(sentences, stopwords).scores
    }

    /// Score every sentence, keeping convergence information
    pub fn rank_with_info(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> RankOutput {
        let matrix = SimilarityMatrix::build(
            sentences,
            stopwords,
            &CosineSimilarity,
            self.config.parallel_threshold,
        );
        let builder = SentenceGraphBuilder::from_matrix(&matrix);
        let graph = CsrGraph::from_builder(&builder);

        rank_graph(&graph, &PageRankRanker, &self.config)
    }
}

/// Convenience function to rank sentences with the default configuration
pub fn rank(sentences: &[Sentence], stopwords: &StopwordFilter) -> ScoreMap {
    SentenceRanker::new().rank(sentences, stopwords)
}
