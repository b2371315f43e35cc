use maxflow::maximum_flow::edmonds_karp::EdmondsKarp;
use maxflow::maximum_flow::graph::Graph;

fn main() {
    env_logger::init();

    let mut graph = Graph::default();
    let nodes = graph.add_nodes(["source", "a", "b", "sink"]).unwrap();

    let edges = vec![
        graph.add_directed_edge(nodes[0], nodes[1], 3).unwrap(),
        graph.add_directed_edge(nodes[0], nodes[2], 2).unwrap(),
        graph.add_directed_edge(nodes[1], nodes[2], 5).unwrap(),
        graph.add_directed_edge(nodes[1], nodes[3], 2).unwrap(),
        graph.add_directed_edge(nodes[2], nodes[3], 3).unwrap(),
    ];

    let mut solver = EdmondsKarp::default();
    match solver.solve_by_name("source", "sink", &mut graph) {
        Ok(flow) => {
            println!("maximum flow:{} ({} augmentations)", flow, solver.num_augmentations());
            for edge_id in edges {
                let edge = graph.get_edge(edge_id).unwrap();
                println!("{} -> {}: {}/{}", graph.node_name(edge.from).unwrap(), graph.node_name(edge.to).unwrap(), edge.flow, edge.upper);
            }
            let cut: Vec<_> = graph.minimum_cut(nodes[0]).into_iter().filter_map(|u| graph.node_name(u)).collect();
            println!("minimum cut:{:?} capacity:{}", cut, graph.cut_capacity(nodes[0]));
        }
        Err(e) => eprintln!("{e}"),
    }
}
