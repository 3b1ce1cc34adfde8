//! # overlap-dag
//!
//! Chains token strings (phone-number fragments, k-mers, word pieces) whose
//! ends overlap, and finds the longest chain.
//!
//! ## How it works
//!
//! 1. **Build**: every token is a vertex; `a → b` when the last two characters
//!    of `a` equal the first two characters of `b`.
//! 2. **Break cycles**: edges are removed one at a time until Kahn's algorithm
//!    can order every vertex.
//! 3. **Solve**: the longest path in the resulting DAG is found by relaxation
//!    along a topological order, and every path of that length from the best
//!    source is reconstructed.
//!
//! ## Quick Start
//!
//! ```rust
//! use overlap_dag::OverlapGraph;
//!
//! let mut graph = OverlapGraph::new();
//! graph.add_all(["1234", "3456", "5678"]).unwrap();
//! graph.break_cycles();
//!
//! let longest = graph.find_longest_path().unwrap();
//! assert_eq!(longest.to_string(), "12345678");
//! ```
//!
//! ## Cycles
//!
//! ```rust
//! use overlap_dag::OverlapGraph;
//!
//! let mut graph = OverlapGraph::from_tokens(["ab12", "12cd", "cdab"]).unwrap();
//! assert!(graph.find_longest_path().is_err()); // still cyclic
//!
//! graph.break_cycles();
//! assert_eq!(graph.find_longest_path().unwrap().length(), 2);
//! ```
//!
//! ## Features
//!
//! - `cli` (default): the `overlap-dag` binary and its [`cli`] module.

pub mod config;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod paths;
pub mod render;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{OverlapConfig, ShortTokens};
pub use cycles::RemovedEdge;
pub use error::{Error, Result};
pub use graph::OverlapGraph;
pub use metrics::GraphStats;
pub use paths::LongestPaths;
