//! Pipeline composition and execution.
//!
//! ## Submodules
//!
//! - [`traits`]: Stage trait definitions and default stages
//! - [`runner`]: Pipeline orchestration
//! - [`observer`]: Logging, profiling, and debug hooks

pub mod observer;
pub mod runner;
pub mod traits;

// Re-export observer types.
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGES, STAGE_GRAPH, STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT,
    STAGE_SIMILARITY,
};

// Re-export runner types (Pipeline, builder, type alias).
pub use runner::{Pipeline, PipelineBuilder, TextRankPipeline};

// Re-export stage traits and default implementations.
pub use traits::{CosineSimilarity, PageRankRanker, Ranker, SentenceSimilarity};
