//! Basic flow: build a graph, query shortest paths, drain a priority queue.

use dskit::*;

fn main() -> DsResult<()> {
    // The same vertex may be written as a number or a string
    let mut builder = GraphBuilder::new();
    builder
        .link(0, 5)
        .link(0, 1)
        .link("5", 4)
        .link(4, 3)
        .link(0, "meow")
        .link("meow", "cat")
        .link(7, 8);
    let graph = builder.build();

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let paths = BreadthFirstPaths::new(&graph, 0)?;
    for v in paths.visit_order() {
        println!("  {} at distance {:?}", v, paths.distance_to(v));
    }

    if let Some(path) = paths.shortest_path_to(3) {
        let hops: Vec<&str> = path.iter().map(|v| v.as_str()).collect();
        println!("Path 3 -> 0: {}", hops.join(" -> "));
    }
    println!("Path to 7 exists: {}", paths.has_path_to(7)?);

    // Order vertices by distance with the min-priority queue
    let mut table = MinPQTable::new();
    for v in paths.visit_order() {
        if let Some(d) = paths.distance_to(v) {
            table.insert(d, v.clone())?;
        }
    }
    while let Ok(node) = table.delete_min() {
        println!("  [{}] {}", node.key, node.value);
    }

    Ok(())
}
