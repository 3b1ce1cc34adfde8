//! Cycle detection and cycle breaking.
//!
//! Overlap graphs are cyclic as soon as two tokens overlap each other in both
//! directions. [`OverlapGraph::break_cycles`] removes edges one at a time until
//! a Kahn pass can order every vertex. It is a greedy heuristic: it does not
//! try to remove the fewest edges.
//!
//! ```
//! use overlap_dag::OverlapGraph;
//!
//! let mut graph = OverlapGraph::from_tokens(["ab12", "12cd", "cdab"]).unwrap();
//! assert!(graph.has_cycle());
//!
//! let removed = graph.break_cycles();
//! assert_eq!(removed.len(), 1);
//! assert!(!graph.has_cycle());
//! ```

use tracing::{debug, info};

use crate::graph::OverlapGraph;

/// An edge taken out of the graph by [`OverlapGraph::break_cycles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEdge {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current DFS path, at this depth.
    OnStack(usize),
    Done,
}

impl OverlapGraph {
    /// Check if the graph contains a directed cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let graph = OverlapGraph::from_tokens(["1234", "3412"]).unwrap();
    /// assert!(graph.has_cycle());
    ///
    /// let graph = OverlapGraph::from_tokens(["1234", "3456"]).unwrap();
    /// assert!(!graph.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Find one cycle, returned as tokens with the first token repeated at the end.
    ///
    /// Uses a depth-first search with an explicit stack, independent of the
    /// Kahn pass used for cycle breaking.
    pub fn find_cycle(&self) -> Option<Vec<&str>> {
        let n = self.tokens.len();
        let mut marks = vec![Mark::Unvisited; n];
        let mut path: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::OnStack(0);
            path.push((root, 0));

            while let Some(frame) = path.last_mut() {
                let (idx, slot) = *frame;
                let Some(&succ) = self.successors[idx].get(slot) else {
                    marks[idx] = Mark::Done;
                    path.pop();
                    continue;
                };
                frame.1 += 1;

                match marks[succ] {
                    Mark::OnStack(start) => {
                        debug_assert_eq!(path[start].0, succ);
                        let mut cycle: Vec<&str> =
                            path[start..].iter().map(|&(v, _)| self.token_at(v)).collect();
                        cycle.push(self.token_at(succ));
                        return Some(cycle);
                    }
                    Mark::Unvisited => {
                        marks[succ] = Mark::OnStack(path.len());
                        path.push((succ, 0));
                    }
                    Mark::Done => {}
                }
            }
        }
        None
    }

    /// Remove edges until the graph is acyclic.
    ///
    /// Each round runs a Kahn pass. If it cannot order every vertex, the first
    /// vertex (insertion order) with leftover in-degree that has a successor
    /// also carrying leftover in-degree loses its edge to the first such
    /// successor, and the pass is repeated. Stored in-degrees are updated with
    /// every removal.
    ///
    /// Returns the removed edges in removal order. Callers that only need the
    /// side effect can ignore it.
    pub fn break_cycles(&mut self) -> Vec<RemovedEdge> {
        let mut removed = Vec::new();

        while let Some((from, slot)) = self.next_feedback_edge() {
            let to = self.remove_edge_at(from, slot);
            debug!(from = %self.token_at(from), to = %self.token_at(to), "removed feedback edge");
            removed.push(RemovedEdge {
                from: self.tokens[from].clone(),
                to: self.tokens[to].clone(),
            });
        }

        debug_assert!(self.in_degrees_consistent());
        info!(
            removed = removed.len(),
            edges = self.edge_count(),
            "graph is acyclic"
        );
        removed
    }

    /// Locate the next edge to drop as `(source, slot in its successor list)`,
    /// or `None` once a Kahn pass drains every vertex.
    fn next_feedback_edge(&self) -> Option<(usize, usize)> {
        let pass = self.kahn_pass();
        if pass.is_complete() {
            return None;
        }

        let remaining = &pass.remaining;
        let edge = (0..self.tokens.len())
            .filter(|&idx| remaining[idx] > 0)
            .find_map(|idx| {
                self.successors[idx]
                    .iter()
                    .position(|&succ| remaining[succ] > 0)
                    .map(|slot| (idx, slot))
            });

        // every residual vertex has a residual predecessor, so some residual edge exists
        debug_assert!(edge.is_some(), "residual subgraph without an edge");
        edge
    }
}
