//! Overlap graph data structure and builder.
//!
//! Vertices are token strings. An edge `a → b` exists when the trailing
//! characters of `a` equal the leading characters of `b` (two characters by
//! default, see [`OverlapConfig`]).
//!
//! ## Performance Characteristics
//!
//! - **Token insertion**: O(n) overlap comparisons against every existing vertex
//! - **Token→Index Mapping**: O(1) via HashMap
//! - **Successor / in-degree lookups**: O(1) via per-vertex vectors
//!
//! Building a graph from `n` tokens costs O(n²) comparisons, which is fine for
//! thousands of tokens but does not scale far beyond that.
//!
//! ## Ordering
//!
//! Vertices keep their insertion order and successor lists keep the order in
//! which edges were discovered. Cycle breaking and path reconstruction walk
//! these vectors directly, so results are reproducible for a given input order.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::{OverlapConfig, ShortTokens};
use crate::error::{Error, Result};
use crate::token;

/// Directed graph of tokens linked by overlapping ends.
///
/// # Examples
///
/// ```
/// use overlap_dag::OverlapGraph;
///
/// let mut graph = OverlapGraph::new();
/// graph.add_all(["1234", "3456", "5678"]).unwrap();
///
/// assert!(graph.has_edge("1234", "3456"));
/// assert!(graph.has_edge("3456", "5678"));
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverlapGraph {
    pub(crate) config: OverlapConfig,
    pub(crate) tokens: Vec<String>,
    pub(crate) id_to_index: HashMap<String, usize>, // token → index cache
    pub(crate) successors: Vec<Vec<usize>>,         // successors[idx] = successor indices
    pub(crate) in_degree: Vec<usize>,               // in_degree[idx] = incoming edge count
}

impl OverlapGraph {
    /// Create an empty graph with the default two-character overlap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with custom settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::{OverlapConfig, OverlapGraph};
    ///
    /// let mut graph = OverlapGraph::with_config(OverlapConfig::with_width(3).unwrap());
    /// graph.add_all(["12345", "34567", "45678"]).unwrap();
    ///
    /// assert!(graph.has_edge("12345", "34567"));
    /// assert!(!graph.has_edge("12345", "45678"));
    /// ```
    pub fn with_config(config: OverlapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a graph from tokens in one go (default settings).
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_tokens_with_config(tokens, OverlapConfig::default())
    }

    /// Build a graph from tokens in one go.
    pub fn from_tokens_with_config<I, S>(tokens: I, config: OverlapConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::with_config(config);
        graph.add_all(tokens)?;
        Ok(graph)
    }

    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Insert every token in order, stopping at the first rejected one.
    pub fn add_all<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            self.add(token)?;
        }
        Ok(())
    }

    /// Insert a token and connect it to every existing vertex it overlaps.
    ///
    /// Edges *into* the new vertex are discovered first, then edges *out of*
    /// it, each pass walking existing vertices in insertion order. Returns
    /// `Ok(false)` if the token was already present; re-inserting is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::TokenTooShort`] when the token is shorter than the overlap
    /// width and the policy is [`ShortTokens::Reject`]. The graph is left
    /// unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let mut graph = OverlapGraph::new();
    /// assert_eq!(graph.add("ab12"), Ok(true));
    /// assert_eq!(graph.add("ab12"), Ok(false));
    /// assert!(graph.add("x").is_err());
    /// ```
    pub fn add(&mut self, token: impl Into<String>) -> Result<bool> {
        let token = token.into();
        let width = self.config.width();

        if token.chars().count() < width {
            match self.config.short_tokens() {
                ShortTokens::Reject => return Err(Error::token_too_short(token, width)),
                ShortTokens::Isolate => {
                    warn!(token = %token, width, "token shorter than overlap, inserting without edges");
                }
            }
        }

        if self.id_to_index.contains_key(&token) {
            debug!(token = %token, "duplicate token ignored");
            return Ok(false);
        }

        let idx = self.tokens.len();
        self.id_to_index.insert(token.clone(), idx);
        self.tokens.push(token);
        self.successors.push(Vec::new());
        self.in_degree.push(0);

        for other in 0..idx {
            if self.connects(other, idx) {
                self.insert_edge(other, idx);
            }
        }
        for other in 0..idx {
            if self.connects(idx, other) {
                self.insert_edge(idx, other);
            }
        }

        debug!(
            token = %self.tokens[idx],
            in_degree = self.in_degree[idx],
            out_degree = self.successors[idx].len(),
            "vertex added"
        );
        Ok(true)
    }

    /// The overlap predicate under this graph's settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let graph = OverlapGraph::new();
    /// assert!(graph.is_connected("ab12", "12cd"));
    /// assert!(!graph.is_connected("12cd", "ab12"));
    /// ```
    pub fn is_connected(&self, from: &str, to: &str) -> bool {
        token::overlaps(from, to, self.config.width())
    }

    fn connects(&self, from: usize, to: usize) -> bool {
        from != to && self.is_connected(&self.tokens[from], &self.tokens[to])
    }

    fn insert_edge(&mut self, from: usize, to: usize) {
        debug_assert_ne!(from, to, "self-loops are never inserted");
        self.successors[from].push(to);
        self.in_degree[to] += 1;
    }

    /// Remove the edge stored at `slot` of `from`'s successor list.
    /// Returns the index of the vertex the edge pointed to.
    pub(crate) fn remove_edge_at(&mut self, from: usize, slot: usize) -> usize {
        let to = self.successors[from].remove(slot);
        self.in_degree[to] -= 1;
        to
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.id_to_index.contains_key(token)
    }

    /// Tokens in insertion order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Successors of `token` in discovery order, or `None` if it is not a vertex.
    pub fn successors(&self, token: &str) -> Option<Vec<&str>> {
        let idx = self.node_index(token)?;
        Some(
            self.successors[idx]
                .iter()
                .map(|&succ| self.tokens[succ].as_str())
                .collect(),
        )
    }

    /// Stored in-degree of `token`, or `None` if it is not a vertex.
    pub fn in_degree(&self, token: &str) -> Option<usize> {
        self.node_index(token).map(|idx| self.in_degree[idx])
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index(from), self.node_index(to)) {
            (Some(from), Some(to)) => self.successors[from].contains(&to),
            _ => false,
        }
    }

    /// All edges as `(from, to)` pairs, grouped by source in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, succs)| {
                succs
                    .iter()
                    .map(move |&to| (self.tokens[from].as_str(), self.tokens[to].as_str()))
            })
            .collect()
    }

    /// Recount incoming edges from the successor lists and compare them with
    /// the stored in-degrees.
    pub fn in_degrees_consistent(&self) -> bool {
        let mut counted = vec![0usize; self.tokens.len()];
        for succs in &self.successors {
            for &to in succs {
                counted[to] += 1;
            }
        }
        counted == self.in_degree
    }

    #[inline]
    pub(crate) fn node_index(&self, token: &str) -> Option<usize> {
        self.id_to_index.get(token).copied()
    }

    #[inline]
    pub(crate) fn token_at(&self, idx: usize) -> &str {
        &self.tokens[idx]
    }
}
