//! Graph construction and representation
//!
//! This module provides the weighted sentence-similarity graph and its
//! CSR form used by PageRank.

pub mod builder;
pub mod csr;
