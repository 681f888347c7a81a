use statespace_solver::graph::{bfs_order, dfs_order, Graph};

// Demo over the reference 4-vertex digraph. Both traversals start at
// vertex 2 and print the visit order on one line.
fn main() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1);
    graph.add_edge(0, 2);
    graph.add_edge(1, 2);
    graph.add_edge(2, 0);
    graph.add_edge(2, 3);
    graph.add_edge(3, 3);

    println!("Breadth First Traversal (starting from vertex 2):");
    println!("{}", format_order(&bfs_order(&graph, 2)));

    println!("Depth First Traversal (starting from vertex 2):");
    println!("{}", format_order(&dfs_order(&graph, 2)));
}

fn format_order(order: &[usize]) -> String {
    order
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
