use overlap_dag::OverlapGraph;

fn main() {
    println!("=== Basic Usage Examples ===\n");

    // Example 1: Simple chain
    println!("1. Simple Chain (1234 -> 3456 -> 5678):");
    let mut graph = OverlapGraph::from_tokens(["1234", "3456", "5678"]).unwrap();
    graph.break_cycles();
    print!("{}", graph.render_edges());
    println!("   longest: {}\n", graph.find_longest_path().unwrap());

    // Example 2: Two equally long branches
    println!("2. Branches of equal length:");
    let mut graph = OverlapGraph::from_tokens(["aa11", "11bb", "11cc", "bb99", "cc99"]).unwrap();
    graph.break_cycles();
    print!("{}", graph.render_adjacency());
    println!("   longest paths:\n{}\n", graph.find_longest_path().unwrap());

    // Example 3: Builder API, token by token
    println!("3. Builder API:");
    let mut graph = OverlapGraph::new();
    for token in ["380501", "0123", "2345", "4567"] {
        let added = graph.add(token).unwrap();
        println!("   add {token:<8} new={added} edges={}", graph.edge_count());
    }
    graph.break_cycles();
    println!("   longest: {}\n", graph.find_longest_path().unwrap());

    // Example 4: Stats
    println!("4. Stats:");
    println!("   {}", graph.stats());
}
