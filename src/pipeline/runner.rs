//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its stage types, so the compiler monomorphizes
//! each combination. The default stages are zero-sized.

use crate::errors::{Result, SummarizeError};
use crate::graph::builder::SentenceGraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::segmenter::Segmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH, STAGE_RANK,
    STAGE_SEGMENT, STAGE_SELECT, STAGE_SIMILARITY,
};
use crate::pipeline::traits::{
    CosineSimilarity, PageRankRanker, Ranker, SentenceSimilarity,
};
use crate::summarizer::matrix::SimilarityMatrix;
use crate::summarizer::ranker::rank_graph;
use crate::summarizer::selector::{assemble, SelectorConfig, SentenceSelector};
use crate::types::{Summary, SummarizerConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). The span stays entered until the end of the enclosing block.
/// When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Sim` | [`SentenceSimilarity`] | [`CosineSimilarity`] |
/// | `Rnk` | [`Ranker`] | [`PageRankRanker`] |
#[derive(Debug, Clone, Default)]
pub struct Pipeline<Sim = CosineSimilarity, Rnk = PageRankRanker> {
    pub similarity: Sim,
    pub ranker: Rnk,
}

/// Type alias for the default sentence TextRank pipeline.
pub type TextRankPipeline = Pipeline<CosineSimilarity, PageRankRanker>;

impl TextRankPipeline {
    /// Build the standard pipeline: bag-of-words cosine edges ranked by
    /// weighted PageRank.
    pub fn textrank() -> Self {
        Pipeline {
            similarity: CosineSimilarity,
            ranker: PageRankRanker,
        }
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Sim, Rnk> Pipeline<Sim, Rnk>
where
    Sim: SentenceSimilarity,
    Rnk: Ranker,
{
    /// Execute the pipeline, producing a [`Summary`].
    ///
    /// Stages run in order:
    /// 1. Segment text into sentences
    /// 2. Build the similarity matrix
    /// 3. Build the sentence graph
    /// 4. Rank
    /// 5. Select and assemble
    ///
    /// The config is validated first. Either a complete summary is returned
    /// or an error; there are no partial results.
    pub fn run(
        &self,
        text: &str,
        stopwords: &StopwordFilter,
        cfg: &SummarizerConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        cfg.validate()?;

        // Each stage runs in its own block so its span closes before the next
        // one opens.

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = Segmenter::new()
                .with_normalization(cfg.normalization)
                .segment(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            observer.on_sentences(&sentences);
            sentences
        };

        if sentences.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        // Stage 2: Similarity matrix
        let matrix = {
            trace_stage!(STAGE_SIMILARITY);
            observer.on_stage_start(STAGE_SIMILARITY);
            let clock = StageClock::start();
            let matrix = SimilarityMatrix::build(
                &sentences,
                stopwords,
                &self.similarity,
                cfg.parallel_threshold,
            );
            let report = StageReport::new(clock.elapsed());
            observer.on_stage_end(STAGE_SIMILARITY, &report);
            observer.on_matrix(&matrix);
            matrix
        };

        // Stage 3: Graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let builder = SentenceGraphBuilder::from_matrix(&matrix);
            let graph = CsrGraph::from_builder(&builder);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(graph.num_nodes)
                .edges(builder.edge_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            graph
        };

        // Stage 4: Rank
        let ranked = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranked = rank_graph(&graph, &self.ranker, cfg);
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(ranked.iterations)
                .converged(ranked.converged)
                .residual(ranked.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_scores(&ranked.scores);
            ranked
        };

        // Stage 5: Select
        let (selected, text) = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let selected = SentenceSelector::with_config(SelectorConfig::from(cfg))
                .select(&sentences, &ranked.scores)?;
            let text = assemble(&selected);
            let report = StageReportBuilder::new(clock.elapsed())
                .sentences(selected.len())
                .build();
            observer.on_stage_end(STAGE_SELECT, &report);
            (selected, text)
        };

        Ok(Summary {
            sentences: selected,
            text,
            converged: ranked.converged,
            iterations: ranked.iterations,
        })
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// ```
/// # use rapid_summarizer::pipeline::runner::PipelineBuilder;
/// # use rapid_summarizer::pipeline::traits::PageRankRanker;
/// let pipeline = PipelineBuilder::new().ranker(PageRankRanker).build();
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<Sim = CosineSimilarity, Rnk = PageRankRanker> {
    similarity: Sim,
    ranker: Rnk,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            similarity: CosineSimilarity,
            ranker: PageRankRanker,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sim, Rnk> PipelineBuilder<Sim, Rnk> {
    /// Override the similarity stage.
    pub fn similarity<S: SentenceSimilarity>(self, s: S) -> PipelineBuilder<S, Rnk> {
        PipelineBuilder {
            similarity: s,
            ranker: self.ranker,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Sim, R> {
        PipelineBuilder {
            similarity: self.similarity,
            ranker: r,
        }
    }

    /// Finish building.
    pub fn build(self) -> Pipeline<Sim, Rnk> {
        Pipeline {
            similarity: self.similarity,
            ranker: self.ranker,
        }
    }
}
