use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::ResidualView;
use log::{debug, trace, warn};
use num_traits::{NumAssign, Signed};
use std::fmt::Debug;

/// Maximum flow by repeated augmentation along shortest residual paths.
///
/// Terminates after O(V·E) augmentations regardless of capacity values. Leaves a
/// maximum flow assignment in the graph's edges.
#[derive(Default, Debug, Clone)]
pub struct EdmondsKarp {
    augmentation_limit: Option<usize>,
    num_augmentations: usize,
}

impl EdmondsKarp {
    pub fn with_augmentation_limit(limit: usize) -> Self {
        Self { augmentation_limit: Some(limit), ..Self::default() }
    }

    #[inline]
    pub fn augmentation_limit(&self) -> Option<usize> {
        self.augmentation_limit
    }

    /// Number of augmentations performed by the last call to `solve`.
    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Signed + PartialOrd + Copy + Debug,
    {
        for u in [source, sink] {
            if u >= graph.num_nodes() {
                return Err(FlowError::UnknownNode(u));
            }
        }
        if source == sink {
            return Err(FlowError::SameEndpoints(source));
        }
        if graph.has_flow() {
            return Err(FlowError::StaleFlow);
        }

        debug!("edmonds-karp: source={} sink={} nodes={} edges={}", source, sink, graph.num_nodes(), graph.num_edges());
        self.num_augmentations = 0;

        let mut flow = Flow::zero();
        loop {
            let view = ResidualView::new(graph);
            let Some(prev) = view.find_augmenting_path(source, sink) else {
                break;
            };

            // calculate delta
            let path = prev.path();
            let Some(delta) = view.bottleneck(&path) else {
                break;
            };

            if let Some(limit) = self.augmentation_limit {
                if self.num_augmentations >= limit {
                    warn!("edmonds-karp: augmentation limit {} reached with flow {:?}", limit, flow);
                    return Err(FlowError::AugmentationLimit { limit });
                }
            }

            // update flow
            graph.augment(&path, delta)?;
            self.num_augmentations += 1;
            flow += delta;
            trace!("augmentation {}: {} edges, delta {:?}", self.num_augmentations, path.len(), delta);
        }

        debug!("edmonds-karp: {} augmentations, maximum flow {:?}", self.num_augmentations, flow);
        Ok(flow)
    }

    pub fn solve_by_name<Flow>(&mut self, source: &str, sink: &str, graph: &mut Graph<Flow>) -> Result<Flow, FlowError>
    where
        Flow: NumAssign + Signed + PartialOrd + Copy + Debug,
    {
        let (source, sink) = (graph.node_id(source)?, graph.node_id(sink)?);
        self.solve(source, sink, graph)
    }
}
