//! Topological orderings of the overlap graph.
//!
//! Two orderings are used:
//!
//! - a Kahn pass (BFS over zero in-degree vertices), which also reports the
//!   in-degrees left over on vertices stuck behind a cycle;
//! - a depth-first reverse post-order, used for longest-path relaxation.
//!
//! Both walk vertices and successor lists in insertion order and use explicit
//! queues/stacks, so large graphs do not hit call-depth limits.

use std::collections::VecDeque;

use crate::graph::OverlapGraph;

/// Result of one Kahn pass over a scratch copy of the in-degrees.
#[derive(Debug, Clone)]
pub(crate) struct KahnPass {
    /// Vertices drained from the queue, in order
    pub(crate) order: Vec<usize>,
    /// In-degrees left after draining; positive only for vertices on or behind a cycle
    pub(crate) remaining: Vec<usize>,
}

impl KahnPass {
    pub(crate) fn is_complete(&self) -> bool {
        self.order.len() == self.remaining.len()
    }

    /// Number of vertices the pass could not order.
    pub(crate) fn residual(&self) -> usize {
        self.remaining.len() - self.order.len()
    }
}

impl OverlapGraph {
    /// Run Kahn's algorithm without touching the stored in-degrees.
    pub(crate) fn kahn_pass(&self) -> KahnPass {
        let mut remaining = self.in_degree.clone();
        let mut order = Vec::with_capacity(self.tokens.len());

        let mut queue: VecDeque<usize> = remaining
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(idx, _)| idx)
            .collect();

        while let Some(idx) = queue.pop_front() {
            order.push(idx);
            for &succ in &self.successors[idx] {
                remaining[succ] -= 1;
                if remaining[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        KahnPass { order, remaining }
    }

    /// Vertices in an order where every edge points forward.
    ///
    /// Computed from a depth-first post-order, reversed. Only meaningful on an
    /// acyclic graph.
    pub(crate) fn dfs_topological_order(&self) -> Vec<usize> {
        let n = self.tokens.len();
        let mut visited = vec![false; n];
        let mut post_order = Vec::with_capacity(n);
        // (vertex, next successor slot to explore)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (idx, slot) = *frame;
                if let Some(&succ) = self.successors[idx].get(slot) {
                    frame.1 += 1;
                    if !visited[succ] {
                        visited[succ] = true;
                        stack.push((succ, 0));
                    }
                } else {
                    post_order.push(idx);
                    stack.pop();
                }
            }
        }

        post_order.reverse();
        post_order
    }

    /// Sort tokens so that every edge points forward.
    ///
    /// # Returns
    /// * `Ok(Vec<&str>)` - Tokens in topological order (Kahn, insertion order tie-break)
    /// * `Err(Vec<&str>)` - The graph has cycles; the tokens that could not be ordered
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let graph = OverlapGraph::from_tokens(["5678", "3456", "1234"]).unwrap();
    /// assert_eq!(graph.topological_order(), Ok(vec!["1234", "3456", "5678"]));
    ///
    /// let cyclic = OverlapGraph::from_tokens(["ab12", "12ab"]).unwrap();
    /// assert_eq!(cyclic.topological_order(), Err(vec!["ab12", "12ab"]));
    /// ```
    pub fn topological_order(&self) -> Result<Vec<&str>, Vec<&str>> {
        let pass = self.kahn_pass();
        if pass.is_complete() {
            Ok(pass.order.iter().map(|&idx| self.token_at(idx)).collect())
        } else {
            Err(pass
                .remaining
                .iter()
                .enumerate()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(idx, _)| self.token_at(idx))
                .collect())
        }
    }
}
