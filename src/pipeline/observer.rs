//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::summarizer::matrix::SimilarityMatrix;
use crate::types::{ScoreMap, Sentence};

// ─── Stage names ────────────────────────────────────────────────────────────

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// All stages in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_SIMILARITY,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_SELECT,
];

// ─── Timing ─────────────────────────────────────────────────────────────────

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

// ─── Reports ────────────────────────────────────────────────────────────────

/// What a stage did. Fields that don't apply to a stage are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    pub sentences: Option<usize>,
    pub edges: Option<usize>,
    pub iterations: Option<usize>,
    pub converged: Option<bool>,
    pub residual: Option<f64>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    pub fn edges(mut self, n: usize) -> Self {
        self.report.edges = Some(n);
        self
    }

    pub fn iterations(mut self, n: usize) -> Self {
        self.report.iterations = Some(n);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Stage-boundary callbacks. Every method has an empty default.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_matrix(&mut self, _matrix: &SimilarityMatrix) {}

    fn on_scores(&mut self, _scores: &ScoreMap) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records the report of every finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in completion order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a stage, if it ran.
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations.
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .sentences(4)
            .edges(6)
            .iterations(12)
            .converged(true)
            .residual(1e-7)
            .build();

        assert_eq!(report.elapsed, Duration::from_millis(3));
        assert_eq!(report.sentences, Some(4));
        assert_eq!(report.edges, Some(6));
        assert_eq!(report.iterations, Some(12));
        assert_eq!(report.converged, Some(true));
        assert_eq!(report.residual, Some(1e-7));
    }

    #[test]
    fn test_plain_report_has_no_counts() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.sentences.is_none());
        assert!(report.converged.is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut observer = StageTimingObserver::new();
        observer.on_stage_start(STAGE_SEGMENT);
        observer.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::from_millis(1)));
        observer.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<_> = observer.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_SEGMENT, STAGE_RANK]);
        assert_eq!(observer.total_elapsed(), Duration::from_millis(3));
        assert!(observer.report(STAGE_GRAPH).is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        let second = clock.elapsed();
        assert!(second >= first);
    }
}
