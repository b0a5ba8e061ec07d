//! Sentence graph builder
//!
//! Nodes are sentence indices `0..n`. Edges are stored once per unordered
//! pair in an FxHashMap, so symmetry holds by construction and self-loops
//! cannot be represented.

use crate::summarizer::matrix::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// An undirected edge between two sentences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Smaller endpoint
    pub a: u32,
    /// Larger endpoint
    pub b: u32,
    /// Edge weight (always > 0)
    pub weight: f64,
}

/// A mutable weighted sentence graph
#[derive(Debug, Clone, Default)]
pub struct SentenceGraphBuilder {
    /// Number of nodes (sentences)
    num_nodes: usize,
    /// Unordered pair `(min, max)` -> weight
    edges: FxHashMap<(u32, u32), f64>,
}

impl SentenceGraphBuilder {
    /// Create a graph with `num_nodes` isolated nodes
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: FxHashMap::default(),
        }
    }

    /// Build the complete similarity graph from a matrix
    ///
    /// Every off-diagonal pair with positive similarity becomes an edge;
    /// zero-similarity pairs carry no edge.
    pub fn from_matrix(matrix: &SimilarityMatrix) -> Self {
        let n = matrix.len();
        let mut builder = Self::new(n);

        for i in 0..n {
            for j in (i + 1)..n {
                builder.add_edge(i as u32, j as u32, matrix.get(i, j));
            }
        }

        builder
    }

    /// Set the weight of the edge between two nodes
    ///
    /// Self-loops, out-of-range nodes, and non-positive or non-finite weights
    /// are ignored.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }
        if from as usize >= self.num_nodes || to as usize >= self.num_nodes {
            return;
        }
        if !(weight > 0.0) || !weight.is_finite() {
            return;
        }

        self.edges.insert(Self::key(from, to), weight);
    }

    /// Weight of the edge between two nodes, if any
    pub fn weight(&self, a: u32, b: u32) -> Option<f64> {
        self.edges.get(&Self::key(a, b)).copied()
    }

    /// All edges sorted by endpoints
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .edges
            .iter()
            .map(|(&(a, b), &weight)| Edge { a, b, weight })
            .collect();
        edges.sort_by_key(|e| (e.a, e.b));
        edges
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.num_nodes
    }

    /// Get the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    fn key(a: u32, b: u32) -> (u32, u32) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
