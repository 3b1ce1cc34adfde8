//! Structural properties of the build → break → solve pipeline, checked on
//! hand-picked and generated token sets.

use std::collections::HashSet;

use overlap_dag::token::overlaps;
use overlap_dag::{OverlapGraph, RemovedEdge};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

type Checked = Result<(), TestCaseError>;

/// Distinct tokens over a small alphabet so overlaps (and cycles) are common.
fn token_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[012]{2,4}", 2..10).prop_map(|set| set.into_iter().collect())
}

fn fixed_token_sets() -> Vec<Vec<String>> {
    [
        vec!["1234", "3456", "5678"],
        vec!["ab12", "12cd", "cdab"],
        vec!["xy"],
        vec!["1111", "11x11", "11y11", "11z11"],
        vec!["xx00", "00zz", "0012", "1200"],
        vec!["aa11", "11bb", "11cc", "bb99", "cc99"],
    ]
    .into_iter()
    .map(|set| set.into_iter().map(String::from).collect())
    .collect()
}

fn edge_set(graph: &OverlapGraph) -> HashSet<(String, String)> {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect()
}

/// Longest simple path from `token`, by exhaustive search.
fn brute_force_longest(graph: &OverlapGraph, token: &str, on_path: &mut Vec<String>) -> usize {
    on_path.push(token.to_string());
    let mut best = 0;
    for succ in graph.successors(token).unwrap() {
        if !on_path.iter().any(|t| t == succ) {
            best = best.max(1 + brute_force_longest(graph, succ, on_path));
        }
    }
    on_path.pop();
    best
}

/// Every simple path with exactly `length` edges from the last token of `path`.
fn brute_force_paths(
    graph: &OverlapGraph,
    path: &mut Vec<String>,
    length: usize,
    out: &mut HashSet<Vec<String>>,
) {
    if path.len() == length + 1 {
        out.insert(path.clone());
        return;
    }
    let last = path[path.len() - 1].clone();
    for succ in graph.successors(&last).unwrap() {
        if !path.iter().any(|t| t == succ) {
            path.push(succ.to_string());
            brute_force_paths(graph, path, length, out);
            path.pop();
        }
    }
}

fn check_edges_match_overlap_rule(tokens: &[String]) -> Checked {
    let graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    for u in tokens {
        for v in tokens {
            let expected = u != v && overlaps(u, v, 2);
            prop_assert_eq!(graph.has_edge(u, v), expected, "{} -> {}", u, v);
        }
    }
    Ok(())
}

fn check_no_self_loops(tokens: &[String]) -> Checked {
    let mut graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    prop_assert!(graph.edges().iter().all(|(from, to)| from != to));
    graph.break_cycles();
    prop_assert!(graph.edges().iter().all(|(from, to)| from != to));
    Ok(())
}

fn check_in_degrees_consistent(tokens: &[String]) -> Checked {
    let mut graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    prop_assert!(graph.in_degrees_consistent(), "after build");
    graph.break_cycles();
    prop_assert!(graph.in_degrees_consistent(), "after break");

    for token in tokens {
        let incoming = graph.edges().iter().filter(|(_, to)| to == token).count();
        prop_assert_eq!(graph.in_degree(token), Some(incoming));
    }
    Ok(())
}

fn check_break_leaves_dag(tokens: &[String]) -> Checked {
    let mut graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    let before = edge_set(&graph);

    let removed = graph.break_cycles();

    prop_assert!(!graph.has_cycle());
    prop_assert!(graph.topological_order().is_ok());
    let after = edge_set(&graph);
    prop_assert!(after.is_subset(&before));
    prop_assert_eq!(before.len() - after.len(), removed.len());
    for RemovedEdge { from, to } in &removed {
        let edge = (from.clone(), to.clone());
        prop_assert!(before.contains(&edge));
        prop_assert!(!after.contains(&edge));
    }
    Ok(())
}

fn check_longest_matches_brute_force(tokens: &[String]) -> Checked {
    let mut graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    graph.break_cycles();

    let mut global = 0;
    for token in tokens {
        let expected = brute_force_longest(&graph, token, &mut Vec::new());
        prop_assert_eq!(graph.longest_path_from(token), Ok(expected), "from {}", token);
        global = global.max(expected);
    }

    prop_assert_eq!(graph.find_longest_path().unwrap().length(), global);
    Ok(())
}

fn check_reconstructed_paths(tokens: &[String]) -> Checked {
    let mut graph = OverlapGraph::from_tokens(tokens.iter().cloned()).unwrap();
    graph.break_cycles();
    let longest = graph.find_longest_path().unwrap();

    prop_assert!(!longest.paths().is_empty());
    for path in longest.paths() {
        prop_assert_eq!(path.len(), longest.length() + 1);
        prop_assert_eq!(path[0].as_str(), longest.source());
        for pair in path.windows(2) {
            prop_assert!(graph.has_edge(&pair[0], &pair[1]), "{:?}", pair);
        }
    }

    let unique: HashSet<Vec<String>> = longest.paths().iter().cloned().collect();
    prop_assert_eq!(unique.len(), longest.paths().len());

    let mut expected = HashSet::new();
    let mut start = vec![longest.source().to_string()];
    brute_force_paths(&graph, &mut start, longest.length(), &mut expected);
    prop_assert_eq!(unique, expected);

    for (path, line) in longest.paths().iter().zip(longest.collapsed()) {
        let expected: usize = path[0].chars().count()
            + path[1..].iter().map(|t| t.chars().count() - 2).sum::<usize>();
        prop_assert_eq!(line.chars().count(), expected);
        prop_assert!(line.starts_with(path[0].as_str()));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn test_generated_edges_match_overlap_rule(tokens in token_set()) {
        check_edges_match_overlap_rule(&tokens)?;
    }

    #[test]
    fn test_generated_no_self_loops_after_any_stage(tokens in token_set()) {
        check_no_self_loops(&tokens)?;
    }

    #[test]
    fn test_generated_in_degrees_consistent_after_build_and_break(tokens in token_set()) {
        check_in_degrees_consistent(&tokens)?;
    }

    #[test]
    fn test_generated_break_cycles_leaves_dag_and_only_removes_edges(tokens in token_set()) {
        check_break_leaves_dag(&tokens)?;
    }

    #[test]
    fn test_generated_longest_path_matches_brute_force(tokens in token_set()) {
        check_longest_matches_brute_force(&tokens)?;
    }

    #[test]
    fn test_generated_reconstructed_paths_are_valid(tokens in token_set()) {
        check_reconstructed_paths(&tokens)?;
    }
}

#[test]
fn test_fixed_sets_edges_match_overlap_rule() {
    for tokens in fixed_token_sets() {
        check_edges_match_overlap_rule(&tokens).unwrap();
    }
}

#[test]
fn test_fixed_sets_no_self_loops() {
    for tokens in fixed_token_sets() {
        check_no_self_loops(&tokens).unwrap();
    }
}

#[test]
fn test_fixed_sets_in_degrees_consistent() {
    for tokens in fixed_token_sets() {
        check_in_degrees_consistent(&tokens).unwrap();
    }
}

#[test]
fn test_fixed_sets_break_leaves_dag() {
    for tokens in fixed_token_sets() {
        check_break_leaves_dag(&tokens).unwrap();
    }
}

#[test]
fn test_fixed_sets_longest_matches_brute_force() {
    for tokens in fixed_token_sets() {
        check_longest_matches_brute_force(&tokens).unwrap();
    }
}

#[test]
fn test_fixed_sets_reconstructed_paths() {
    for tokens in fixed_token_sets() {
        check_reconstructed_paths(&tokens).unwrap();
    }
}

#[test]
fn test_readme_examples() {
    let mut graph = OverlapGraph::from_tokens(["1234", "3456", "5678"]).unwrap();
    graph.break_cycles();
    assert_eq!(graph.find_longest_path().unwrap().to_string(), "12345678");

    let mut graph = OverlapGraph::from_tokens(["ab12", "12cd", "cdab"]).unwrap();
    assert_eq!(graph.break_cycles().len(), 1);
    assert_eq!(graph.find_longest_path().unwrap().length(), 2);

    let mut graph = OverlapGraph::from_tokens(["xy"]).unwrap();
    graph.break_cycles();
    assert_eq!(graph.find_longest_path().unwrap().to_string(), "xy");
}
