//! Example: breaking overlap cycles before searching for the longest chain
//!
//! Tokens that overlap each other in both directions form cycles, and the
//! longest-path search only works on an acyclic graph.

use overlap_dag::{Error, OverlapGraph};

fn main() {
    println!("=== Cycle Breaking Examples ===\n");

    // Example 1: A three-token ring
    example_ring();

    // Example 2: A cycle with a tail feeding into it
    example_cycle_with_tail();

    // Example 3: Searching before breaking is an error
    example_unbroken();
}

fn example_ring() {
    println!("1. Ring ab12 -> 12cd -> cdab -> ab12:");

    let mut graph = OverlapGraph::from_tokens(["ab12", "12cd", "cdab"]).unwrap();
    if let Some(cycle) = graph.find_cycle() {
        println!("   ❌ Cycle detected: {}", cycle.join(" -> "));
    }

    for edge in graph.break_cycles() {
        println!("   removed {} -> {}", edge.from, edge.to);
    }

    let longest = graph.find_longest_path().unwrap();
    println!("   ✓ Acyclic, longest chain ({} edges): {}", longest.length(), longest);
    println!();
}

fn example_cycle_with_tail() {
    println!("2. Tail xx00 feeding the 2-cycle 0012 <-> 1200:");

    let mut graph = OverlapGraph::from_tokens(["xx00", "00zz", "0012", "1200"]).unwrap();
    match graph.topological_order() {
        Ok(order) => println!("   order: {:?}", order),
        Err(stuck) => println!("   cannot order: {:?}", stuck),
    }

    let removed = graph.break_cycles();
    println!("   removed {} edge(s)", removed.len());
    print!("{}", graph.render_adjacency());
    println!("   longest:\n{}", graph.find_longest_path().unwrap());
    println!();
}

fn example_unbroken() {
    println!("3. Longest path on a cyclic graph:");

    let graph = OverlapGraph::from_tokens(["1234", "3412"]).unwrap();
    match graph.find_longest_path() {
        Ok(longest) => println!("   unexpected: {longest}"),
        Err(Error::Cyclic { residual }) => {
            println!("   ✗ refused: {residual} vertices still on cycles")
        }
        Err(e) => println!("   ✗ {e}"),
    }
}
