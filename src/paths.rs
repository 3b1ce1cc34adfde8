//! Longest-path search on the acyclic overlap graph.
//!
//! Every edge has unit length, so the longest path from a source is found by
//! relaxing distances along a topological order. The solver tries every
//! vertex as a source, keeps the best one and then enumerates all paths of
//! that length from it by depth-first search with backtracking.

use core::fmt;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::OverlapGraph;
use crate::render::collapse;

/// Every longest path starting at the best source vertex.
///
/// # Examples
///
/// ```
/// use overlap_dag::OverlapGraph;
///
/// let mut graph = OverlapGraph::from_tokens(["1234", "3456", "5678"]).unwrap();
/// graph.break_cycles();
///
/// let longest = graph.find_longest_path().unwrap();
/// assert_eq!(longest.source(), "1234");
/// assert_eq!(longest.length(), 2);
/// assert_eq!(longest.collapsed(), vec!["12345678"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPaths {
    source: String,
    length: usize,
    paths: Vec<Vec<String>>,
    width: usize,
}

impl LongestPaths {
    /// First vertex of every path.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of edges on each path.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The paths as token sequences, in depth-first discovery order.
    pub fn paths(&self) -> &[Vec<String>] {
        &self.paths
    }

    /// Each path rendered as one string with overlapping characters merged.
    pub fn collapsed(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| collapse(path, self.width))
            .collect()
    }
}

impl fmt::Display for LongestPaths {
    /// One collapsed path per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.collapsed().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl OverlapGraph {
    /// Length of the longest path starting at `source`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownToken`] if `source` is not a vertex, [`Error::Cyclic`]
    /// if cycles have not been broken yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let graph = OverlapGraph::from_tokens(["1234", "3456", "5678"]).unwrap();
    /// assert_eq!(graph.longest_path_from("1234"), Ok(2));
    /// assert_eq!(graph.longest_path_from("5678"), Ok(0));
    /// ```
    pub fn longest_path_from(&self, source: &str) -> Result<usize> {
        let idx = self
            .node_index(source)
            .ok_or_else(|| Error::unknown_token(source))?;
        self.ensure_acyclic()?;
        let order = self.dfs_topological_order();
        Ok(self.longest_from_index(&order, idx))
    }

    /// Find the longest paths in the graph.
    ///
    /// The source with the greatest reachable distance wins; ties go to the
    /// earliest inserted token. All paths of the winning length from that
    /// source are returned.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyGraph`] without vertices, [`Error::Cyclic`] if
    /// [`break_cycles`](Self::break_cycles) has not made the graph acyclic.
    pub fn find_longest_path(&self) -> Result<LongestPaths> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        self.ensure_acyclic()?;

        let order = self.dfs_topological_order();
        let mut best = (0, self.longest_from_index(&order, 0));
        for source in 1..self.tokens.len() {
            let length = self.longest_from_index(&order, source);
            if length > best.1 {
                best = (source, length);
            }
        }
        let (source, length) = best;
        debug!(source = %self.token_at(source), length, "best source");

        let paths: Vec<Vec<String>> = self
            .paths_of_length(source, length)
            .into_iter()
            .map(|path| {
                path.into_iter()
                    .map(|idx| self.tokens[idx].clone())
                    .collect()
            })
            .collect();
        info!(length, paths = paths.len(), "longest path found");

        Ok(LongestPaths {
            source: self.tokens[source].clone(),
            length,
            paths,
            width: self.config.width(),
        })
    }

    fn ensure_acyclic(&self) -> Result<()> {
        let pass = self.kahn_pass();
        if pass.is_complete() {
            Ok(())
        } else {
            Err(Error::Cyclic {
                residual: pass.residual(),
            })
        }
    }

    /// Relax unit-length edges along `order` starting from `source`.
    fn longest_from_index(&self, order: &[usize], source: usize) -> usize {
        let mut distance: Vec<Option<usize>> = vec![None; self.tokens.len()];
        distance[source] = Some(0);

        for &idx in order {
            let Some(current) = distance[idx] else {
                continue;
            };
            for &succ in &self.successors[idx] {
                if distance[succ].is_none_or(|d| d < current + 1) {
                    distance[succ] = Some(current + 1);
                }
            }
        }

        distance.into_iter().flatten().max().unwrap_or(0)
    }

    /// Enumerate every path with exactly `length` edges that starts at `source`.
    fn paths_of_length(&self, source: usize, length: usize) -> Vec<Vec<usize>> {
        let mut found = Vec::new();
        let mut on_path = vec![false; self.tokens.len()];
        let mut path = vec![source];
        // next successor slot to try for each vertex on `path`
        let mut cursors = vec![0usize];
        on_path[source] = true;

        while let Some(&top) = path.last() {
            let depth = path.len() - 1;
            let next = if depth < length {
                let slot = cursors[depth];
                cursors[depth] += 1;
                self.successors[top].get(slot).copied()
            } else {
                found.push(path.clone());
                None
            };

            match next {
                Some(succ) if !on_path[succ] => {
                    on_path[succ] = true;
                    path.push(succ);
                    cursors.push(0);
                }
                Some(_) => {}
                None => {
                    on_path[top] = false;
                    path.pop();
                    cursors.pop();
                }
            }
        }

        found
    }
}
