use overlap_dag::OverlapGraph;

fn main() {
    println!("=== Topological Sorting Examples ===\n");

    // Example 1: Tokens given out of order
    example_shuffled_chain();

    // Example 2: Cycle detection
    example_cycle_detection();
}

fn example_shuffled_chain() {
    println!("1. Shuffled chain:");
    println!("   Tokens: 5678, 3456, 1234\n");

    let graph = OverlapGraph::from_tokens(["5678", "3456", "1234"]).unwrap();

    match graph.topological_order() {
        Ok(sorted) => {
            println!("   Chain order:");
            for (i, token) in sorted.iter().enumerate() {
                println!("   {}. {}", i + 1, token);
            }
        }
        Err(stuck) => println!("   ERROR: Cycle through: {:?}", stuck),
    }
    println!();
}

fn example_cycle_detection() {
    println!("2. Cycle Detection:");
    println!("   1234 -> 3412 -> 1234 (circular!)\n");

    let mut graph = OverlapGraph::from_tokens(["1234", "3412"]).unwrap();

    match graph.topological_order() {
        Ok(_) => println!("   ✓ No cycles detected"),
        Err(stuck) => {
            println!("   ✗ Cycle detected!");
            println!("   Unordered tokens: {:?}", stuck);
        }
    }

    graph.break_cycles();
    match graph.topological_order() {
        Ok(sorted) => println!("   After breaking: {:?}", sorted),
        Err(stuck) => println!("   ERROR: still cyclic: {:?}", stuck),
    }
    println!();
}
