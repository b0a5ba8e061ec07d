//! Standard PageRank algorithm
//!
//! Implements weighted PageRank with power iteration and proper handling of
//! dangling nodes. A node distributes its score to neighbors in proportion
//! to edge weight over its total edge weight; dangling nodes spread their
//! score uniformly.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-node convergence tolerance
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Iteration stops once the L1 change between rounds drops below
    /// `num_nodes * threshold`. Returns the result even if convergence wasn't
    /// achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let limit = n as f64 * self.threshold;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= limit {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores through weighted edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta < limit;

        if !converged {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                iterations,
                delta,
                nodes = n,
                "pagerank hit the iteration cap before converging"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::SentenceGraphBuilder;
    use proptest::prelude::*;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = SentenceGraphBuilder::new(3);
        builder.add_edge(0, 1, 1.0);
        builder.add_edge(1, 2, 1.0);
        builder.add_edge(2, 0, 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub 0 connected to 3 spokes
        let mut builder = SentenceGraphBuilder::new(4);
        builder.add_edge(0, 1, 1.0);
        builder.add_edge(0, 2, 1.0);
        builder.add_edge(0, 3, 1.0);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = StandardPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = StandardPageRank::new().run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_star_graph_closed_form() {
        // Hub h and spokes s satisfy h = 0.15/4 + 0.85 * 3s, s = 0.15/4 + 0.85 * h/3.
        let result = StandardPageRank::new().run(&build_star_graph());

        let h = result.scores[0];
        let s = result.scores[1];
        assert!((h - (0.0375 + 0.85 * 3.0 * s)).abs() < 1e-5);
        assert!((s - (0.0375 + 0.85 * h / 3.0)).abs() < 1e-5);
    }

    #[test]
    fn test_edge_weights_matter() {
        // 0-1 strong, 1-2 weak: node 2 receives less than node 0
        let mut builder = SentenceGraphBuilder::new(3);
        builder.add_edge(0, 1, 0.9);
        builder.add_edge(1, 2, 0.1);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[0] > result.scores[2]);
        assert!(result.scores[1] > result.scores[0]);
    }

    #[test]
    fn test_dangling_node_keeps_share() {
        let mut builder = SentenceGraphBuilder::new(3);
        builder.add_edge(0, 1, 1.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(result.scores[2] > 0.0);
        assert!((result.scores[0] - result.scores[1]).abs() < 1e-9);
    }

    #[test]
    fn test_no_edges_is_uniform() {
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(
            &SentenceGraphBuilder::new(4),
        ));

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_node() {
        let result =
            StandardPageRank::new().run(&CsrGraph::from_builder(&SentenceGraphBuilder::new(1)));

        assert_eq!(result.scores, vec![1.0]);
        assert!(result.converged);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();

        // Lower damping = more teleportation = more uniform scores
        let result_low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let result_high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_deterministic() {
        let graph = build_star_graph();
        let a = StandardPageRank::new().run(&graph);
        let b = StandardPageRank::new().run(&graph);
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.iterations, b.iterations);
    }

    proptest! {
        #[test]
        fn prop_scores_sum_to_one(
            n in 1usize..12,
            edges in prop::collection::vec((0u32..12, 0u32..12, 0.01f64..1.0), 0..40),
        ) {
            let mut builder = SentenceGraphBuilder::new(n);
            for (a, b, w) in edges {
                builder.add_edge(a, b, w);
            }
            let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

            let sum: f64 = result.scores.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-6);
            prop_assert!(result.scores.iter().all(|&s| s >= 0.0));
        }
    }
}
