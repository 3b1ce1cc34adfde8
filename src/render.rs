//! Text rendering for paths and adjacency lists.

use core::fmt::Write;

use crate::graph::OverlapGraph;
use crate::token::strip_head;

/// Join a path into one string, dropping the `width` leading characters that
/// every token after the first shares with its predecessor.
///
/// # Examples
///
/// ```
/// use overlap_dag::render::collapse;
///
/// assert_eq!(collapse(&["1234", "3456", "5678"], 2), "12345678");
/// assert_eq!(collapse(&["xy"], 2), "xy");
/// assert_eq!(collapse::<&str>(&[], 2), "");
/// ```
pub fn collapse<S: AsRef<str>>(path: &[S], width: usize) -> String {
    let mut output = String::new();
    let mut tokens = path.iter().map(AsRef::as_ref);
    if let Some(first) = tokens.next() {
        output.push_str(first);
    }
    for token in tokens {
        output.push_str(strip_head(token, width));
    }
    output
}

impl OverlapGraph {
    /// Render the adjacency lists, one `token => [successor, ...]` line per vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use overlap_dag::OverlapGraph;
    ///
    /// let graph = OverlapGraph::from_tokens(["1234", "3456"]).unwrap();
    /// assert_eq!(graph.render_adjacency(), "1234 => [3456]\n3456 => []\n");
    /// ```
    pub fn render_adjacency(&self) -> String {
        let mut output = String::with_capacity(self.estimate_size());
        self.render_adjacency_to(&mut output);
        output
    }

    /// Render the adjacency lists into an existing buffer.
    pub fn render_adjacency_to(&self, output: &mut String) {
        for (idx, token) in self.tokens.iter().enumerate() {
            output.push_str(token);
            output.push_str(" => [");
            for (i, &succ) in self.successors[idx].iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                output.push_str(&self.tokens[succ]);
            }
            output.push_str("]\n");
        }
    }

    /// Rough buffer size for [`render_adjacency_to`](Self::render_adjacency_to).
    pub fn estimate_size(&self) -> usize {
        let token_bytes: usize = self.tokens.iter().map(String::len).sum();
        let avg = if self.tokens.is_empty() {
            0
        } else {
            token_bytes / self.tokens.len()
        };
        token_bytes + self.tokens.len() * 6 + self.edge_count() * (avg + 2)
    }

    /// Render each edge as `from -> to`, one per line.
    pub fn render_edges(&self) -> String {
        let mut output = String::new();
        for (from, to) in self.edges() {
            writeln!(output, "{from} -> {to}").ok();
        }
        output
    }
}
