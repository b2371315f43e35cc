use crate::maximum_flow::graph::Graph;
use num_traits::{NumAssign, Signed};
use std::collections::VecDeque;

/// Shortest augmenting path found by [`ResidualView::find_augmenting_path`].
///
/// `prev[v]` holds `(u, residual_edge_id)` for the edge `u -> v` that first reached `v`.
/// The source never receives an entry.
#[derive(PartialEq, Debug, Clone)]
pub struct PredecessorMap {
    sink: usize,
    prev: Vec<Option<(usize, usize)>>,
}

impl PredecessorMap {
    pub fn edge_into(&self, v: usize) -> Option<usize> {
        self.prev.get(v).copied().flatten().map(|(_, edge_id)| edge_id)
    }

    pub fn is_reached(&self, v: usize) -> bool {
        self.edge_into(v).is_some()
    }

    /// Residual edge ids from source to sink.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut v = self.sink;
        while let Some((u, edge_id)) = self.prev[v] {
            path.push(edge_id);
            v = u;
        }
        path.reverse();
        path
    }
}

/// Read-only view of the residual capacities of a graph.
pub struct ResidualView<'a, Flow> {
    graph: &'a Graph<Flow>,
}

impl<'a, Flow> ResidualView<'a, Flow>
where
    Flow: NumAssign + Signed + PartialOrd + Copy,
{
    pub fn new(graph: &'a Graph<Flow>) -> Self {
        Self { graph }
    }

    #[inline]
    pub fn residual_capacity(&self, residual_edge_id: usize) -> Flow {
        self.graph.residual_edges[residual_edge_id].residual_capacity()
    }

    // bfs
    // Edges are scanned in insertion order, so ties between shortest paths are deterministic.
    pub fn find_augmenting_path(&self, source: usize, sink: usize) -> Option<PredecessorMap> {
        let n = self.graph.num_nodes();
        if source >= n || sink >= n || source == sink {
            return None;
        }

        let mut prev = vec![None; n];
        let mut visited = vec![false; n];
        visited[source] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &edge_id in self.graph.adjacency[u].iter() {
                let edge = &self.graph.residual_edges[edge_id];
                if visited[edge.to] || !self.is_open(edge_id) {
                    continue;
                }

                visited[edge.to] = true;
                prev[edge.to] = Some((u, edge_id));
                if edge.to == sink {
                    return Some(PredecessorMap { sink, prev });
                }
                queue.push_back(edge.to);
            }
        }

        None
    }

    /// Minimum residual capacity along `path`, or `None` for an empty path.
    pub fn bottleneck(&self, path: &[usize]) -> Option<Flow> {
        path.iter().map(|&edge_id| self.residual_capacity(edge_id)).fold(None, |delta, capacity| match delta {
            Some(d) if d < capacity => Some(d),
            _ => Some(capacity),
        })
    }

    /// Nodes reachable from `source` over edges with positive residual capacity, in BFS order.
    pub fn reachable_from(&self, source: usize) -> Vec<usize> {
        let n = self.graph.num_nodes();
        if source >= n {
            return Vec::new();
        }

        let mut reached = Vec::new();
        let mut visited = vec![false; n];
        visited[source] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            reached.push(u);
            for &edge_id in self.graph.adjacency[u].iter() {
                let v = self.graph.residual_edges[edge_id].to;
                if !visited[v] && self.is_open(edge_id) {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        reached
    }

    #[inline]
    fn is_open(&self, residual_edge_id: usize) -> bool {
        self.residual_capacity(residual_edge_id) > Flow::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_routes() -> Graph<i64> {
        // s -> a -> t and s -> b -> c -> t
        let mut graph = Graph::default();
        graph.add_nodes(["s", "a", "b", "c", "t"]).unwrap();
        graph.add_edge_by_name("s", "b", 4).unwrap();
        graph.add_edge_by_name("s", "a", 2).unwrap();
        graph.add_edge_by_name("b", "c", 4).unwrap();
        graph.add_edge_by_name("a", "t", 1).unwrap();
        graph.add_edge_by_name("c", "t", 4).unwrap();
        graph
    }

    #[test]
    fn finds_fewest_hops_path() {
        let graph = two_routes();
        let view = ResidualView::new(&graph);
        let prev = view.find_augmenting_path(0, 4).unwrap();

        // s -> a -> t wins although s -> b is scanned first
        let path = prev.path();
        assert_eq!(path, vec![2, 6]);
        assert_eq!(view.bottleneck(&path), Some(1));
        assert!(prev.is_reached(1));
        assert!(!prev.is_reached(0));
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let mut graph = Graph::<i64>::default();
        graph.add_nodes(["s", "a", "b", "t"]).unwrap();
        graph.add_directed_edge(0, 2, 1).unwrap();
        graph.add_directed_edge(0, 1, 1).unwrap();
        graph.add_directed_edge(1, 3, 1).unwrap();
        graph.add_directed_edge(2, 3, 1).unwrap();

        let prev = ResidualView::new(&graph).find_augmenting_path(0, 3).unwrap();
        assert_eq!(prev.edge_into(3), Some(6));
        assert_eq!(prev.edge_into(2), Some(0));
    }

    #[test]
    fn saturated_edges_are_skipped() {
        let mut graph = two_routes();
        graph.augment(&[2, 6], 1).unwrap();

        let view = ResidualView::new(&graph);
        let path = view.find_augmenting_path(0, 4).unwrap().path();
        assert_eq!(path, vec![0, 4, 8]);
        assert_eq!(view.bottleneck(&path), Some(4));
    }

    #[test]
    fn reports_no_path() {
        let mut graph = Graph::<f64>::default();
        graph.add_nodes(["s", "t", "x"]).unwrap();
        graph.add_directed_edge(1, 0, 3.0).unwrap();
        graph.add_directed_edge(0, 2, 0.0).unwrap();

        let view = ResidualView::new(&graph);
        assert_eq!(view.find_augmenting_path(0, 1), None);
        assert_eq!(view.find_augmenting_path(0, 0), None);
        assert_eq!(view.find_augmenting_path(0, 9), None);
        assert_eq!(view.bottleneck(&[]), None);
        assert_eq!(view.reachable_from(0), vec![0]);
        assert_eq!(view.reachable_from(1), vec![1, 0]);
    }
}
