use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::residual::ResidualView;
use num_traits::{NumAssign, Signed};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::Sub;

/// A forward edge as inserted by the caller.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// One half of a forward/reverse pair stored in the residual arena.
///
/// A forward edge with id `k` lives at arena index `2 * k`, its reverse at `2 * k + 1`.
/// `rev` always points at the other half.
#[derive(PartialEq, Debug, Clone)]
pub struct ResidualEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Directed network of named nodes.
///
/// Reverse edges carry negative flow, so `Flow` has to be signed:
///
/// ```compile_fail
/// use maxflow::maximum_flow::graph::Graph;
///
/// let mut graph = Graph::<u64>::default();
/// graph.add_nodes(["s", "t"]).unwrap();
/// ```
pub struct Graph<Flow> {
    names: Vec<String>,
    name_to_node: HashMap<String, usize>,
    // residual edge ids leaving each node, in insertion order
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) residual_edges: Vec<ResidualEdge<Flow>>,
}

impl<Flow> Default for Graph<Flow> {
    fn default() -> Self {
        Self { names: Vec::new(), name_to_node: HashMap::new(), adjacency: Vec::new(), residual_edges: Vec::new() }
    }
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Signed + PartialOrd + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    /// Number of caller-inserted edges. Reverse edges are not counted.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.residual_edges.len() / 2
    }

    #[inline]
    pub fn num_residual_edges(&self) -> usize {
        self.residual_edges.len()
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> Result<usize, FlowError> {
        let name = name.into();
        if self.name_to_node.contains_key(&name) {
            return Err(FlowError::DuplicateNode(name));
        }

        let u = self.names.len();
        self.name_to_node.insert(name.clone(), u);
        self.names.push(name);
        self.adjacency.push(Vec::new());
        Ok(u)
    }

    pub fn add_nodes<I, S>(&mut self, names: I) -> Result<Vec<usize>, FlowError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| self.add_node(name)).collect()
    }

    pub fn node_id(&self, name: &str) -> Result<usize, FlowError> {
        self.name_to_node.get(name).copied().ok_or_else(|| FlowError::NoSuchNode(name.to_string()))
    }

    pub fn node_name(&self, u: usize) -> Option<&str> {
        self.names.get(u).map(String::as_str)
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        for u in [from, to] {
            if u >= self.num_nodes() {
                return Err(FlowError::UnknownNode(u));
            }
        }
        // NaN compares as None and is rejected together with negative values
        match upper.partial_cmp(&Flow::zero()) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => {}
            _ => return Err(FlowError::NegativeCapacity { from, to }),
        }

        let forward = self.residual_edges.len();
        let reverse = forward + 1;
        self.residual_edges.push(ResidualEdge { to, flow: Flow::zero(), upper, rev: reverse });
        self.residual_edges.push(ResidualEdge { to: from, flow: Flow::zero(), upper: Flow::zero(), rev: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(reverse);

        Ok(forward / 2)
    }

    pub fn add_edge_by_name(&mut self, from: &str, to: &str, upper: Flow) -> Result<usize, FlowError> {
        let (from, to) = (self.node_id(from)?, self.node_id(to)?);
        self.add_directed_edge(from, to, upper)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let edge = self.residual_edges.get(edge_id.checked_mul(2)?)?;
        Some(Edge { from: self.residual_edges[edge.rev].to, to: edge.to, flow: edge.flow, upper: edge.upper })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        (0..self.num_edges()).filter_map(|edge_id| self.get_edge(edge_id))
    }

    pub fn residual_edge(&self, residual_edge_id: usize) -> Option<&ResidualEdge<Flow>> {
        self.residual_edges.get(residual_edge_id)
    }

    /// Residual edge ids leaving `u`, in insertion order.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        self.adjacency.get(u).map_or(&[][..], Vec::as_slice)
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, residual_edge_id: usize, flow: Flow) {
        let rev = self.residual_edges[residual_edge_id].rev;

        // update flow
        self.residual_edges[residual_edge_id].flow += flow;
        self.residual_edges[rev].flow -= flow;
    }

    /// Pushes `delta` along every residual edge of `path`.
    ///
    /// Nothing is changed when `path` names an edge that does not exist.
    pub fn augment(&mut self, path: &[usize], delta: Flow) -> Result<(), FlowError> {
        if let Some(&residual_edge_id) = path.iter().find(|&&i| i >= self.residual_edges.len()) {
            return Err(FlowError::UnknownEdge(residual_edge_id));
        }

        for &residual_edge_id in path {
            self.push_flow(residual_edge_id, delta);
        }
        Ok(())
    }

    pub fn has_flow(&self) -> bool {
        self.residual_edges.iter().any(|e| e.flow != Flow::zero())
    }

    pub fn reset_flows(&mut self) {
        self.residual_edges.iter_mut().for_each(|e| e.flow = Flow::zero());
    }

    pub fn maximum_flow(&self, source: usize) -> Flow {
        self.edges().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source {
                flow += edge.flow;
            }
            if edge.to == source {
                flow -= edge.flow;
            }
            flow
        })
    }

    /// Source side of the cut induced by the current residual network.
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        ResidualView::new(self).reachable_from(source)
    }

    pub fn cut_capacity(&self, source: usize) -> Flow {
        let mut inside = vec![false; self.num_nodes()];
        for u in self.minimum_cut(source) {
            inside[u] = true;
        }

        self.edges().filter(|e| inside[e.from] && !inside[e.to]).fold(Flow::zero(), |sum, e| sum + e.upper)
    }
}
