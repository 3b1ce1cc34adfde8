//! Graph metrics and statistics.
//!
//! # Examples
//!
//! ```
//! use overlap_dag::OverlapGraph;
//!
//! let graph = OverlapGraph::from_tokens(["1234", "3456", "5678", "abcd"]).unwrap();
//! let stats = graph.stats();
//!
//! assert_eq!(stats.vertex_count(), 4);
//! assert_eq!(stats.edge_count(), 2);
//! assert_eq!(stats.isolated_count(), 1);
//! ```

use core::fmt;

use crate::graph::OverlapGraph;

/// Summary counts for an overlap graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    vertex_count: usize,
    edge_count: usize,
    root_count: usize,
    leaf_count: usize,
    isolated_count: usize,
}

impl GraphStats {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices without incoming edges.
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    /// Vertices without outgoing edges.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Vertices with no edges at all.
    pub fn isolated_count(&self) -> usize {
        self.isolated_count
    }

    /// Graph density (ratio of actual edges to possible edges).
    ///
    /// Returns a value between 0.0 (no edges) and 1.0 (every ordered pair linked).
    pub fn density(&self) -> f64 {
        if self.vertex_count <= 1 {
            0.0
        } else {
            let max_possible_edges = self.vertex_count * (self.vertex_count - 1);
            self.edge_count as f64 / max_possible_edges as f64
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vertices, {} edges, {} roots, {} leaves, {} isolated",
            self.vertex_count, self.edge_count, self.root_count, self.leaf_count, self.isolated_count
        )
    }
}

impl OverlapGraph {
    /// Compute summary counts for the current graph.
    pub fn stats(&self) -> GraphStats {
        let mut root_count = 0;
        let mut leaf_count = 0;
        let mut isolated_count = 0;

        for (succs, &in_degree) in self.successors.iter().zip(&self.in_degree) {
            let is_root = in_degree == 0;
            let is_leaf = succs.is_empty();
            root_count += usize::from(is_root);
            leaf_count += usize::from(is_leaf);
            isolated_count += usize::from(is_root && is_leaf);
        }

        GraphStats {
            vertex_count: self.len(),
            edge_count: self.edge_count(),
            root_count,
            leaf_count,
            isolated_count,
        }
    }
}
