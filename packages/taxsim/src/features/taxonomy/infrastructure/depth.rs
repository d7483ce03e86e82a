//! Per-node distance-from-root indices
//!
//! Both indices are a single dynamic-programming pass over the topological order:
//! a node is finalized only after all of its parents.
//!
//! - [`DepthIndex`]: unweighted **longest** path from the root (edge count)
//! - [`RootDistances`]: cost-weighted **shortest** path from the root

use tracing::debug;

use crate::errors::Result;
use crate::features::taxonomy::domain::TaxonomyGraph;
use crate::shared::models::{Cost, NodeId, ROOT};

/// Depth of every node: longest-path edge count from the root
///
/// A node reachable through several parent chains takes the depth of its most
/// specific (longest) chain. Edge costs play no part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthIndex {
    depth: Vec<u32>,
}

impl DepthIndex {
    /// Compute depths in O(n_nodes + n_edges)
    ///
    /// ```text
    /// depth[root] = 0
    /// depth[v]    = 1 + max(depth[p] for p in parents_of(v))
    /// ```
    pub fn compute(graph: &TaxonomyGraph) -> Result<Self> {
        let order = graph.topological_order()?;
        let mut depth = vec![0u32; graph.node_count()];

        for v in order {
            depth[v] = graph
                .parents_of(v)
                .map(|p| depth[p] + 1)
                .max()
                .unwrap_or(0);
        }

        debug!(
            "Computed depth index for {} nodes (max depth {})",
            depth.len(),
            depth.iter().copied().max().unwrap_or(0)
        );

        Ok(Self { depth })
    }

    pub fn get(&self, v: NodeId) -> Option<u32> {
        self.depth.get(v).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.depth
    }

    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Deepest node among `nodes` and its depth
    ///
    /// Ties go to the first such node in `nodes`. An empty slice yields `(ROOT, 0)`.
    pub fn deepest(&self, nodes: &[NodeId]) -> (NodeId, u32) {
        let mut deepest = (ROOT, 0);
        for &node in nodes {
            if let Some(depth) = self.get(node) {
                if depth > deepest.1 {
                    deepest = (node, depth);
                }
            }
        }
        deepest
    }
}

/// Cheapest cost from the root to every node
///
/// `None` for nodes the root cannot reach. That never happens once the single-root
/// invariant holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDistances {
    distance: Vec<Option<Cost>>,
}

impl RootDistances {
    pub fn compute(graph: &TaxonomyGraph) -> Result<Self> {
        let order = graph.topological_order()?;
        let mut distance: Vec<Option<Cost>> = vec![None; graph.node_count()];

        for v in order {
            if v == ROOT {
                distance[v] = Some(0);
                continue;
            }
            distance[v] = graph
                .parent_edges(v)
                .filter_map(|(p, cost)| distance[p].map(|d| d.saturating_add(cost)))
                .min();
        }

        Ok(Self { distance })
    }

    pub fn get(&self, v: NodeId) -> Option<Cost> {
        self.distance.get(v).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::TaxonomyEdge;

    fn diamond() -> TaxonomyGraph {
        let edges = [
            TaxonomyEdge::unit(0, 1),
            TaxonomyEdge::unit(0, 2),
            TaxonomyEdge::unit(1, 3),
            TaxonomyEdge::unit(2, 3),
        ];
        TaxonomyGraph::build(4, &edges).unwrap()
    }

    #[test]
    fn test_diamond_depths() {
        let depth = DepthIndex::compute(&diamond()).unwrap();
        assert_eq!(depth.as_slice(), &[0, 1, 1, 2]);
    }

    #[test]
    fn test_depth_follows_longest_chain() {
        // 0 -> 1 -> 2 -> 3 and the shortcut 0 -> 3
        let edges = [
            TaxonomyEdge::unit(0, 1),
            TaxonomyEdge::unit(1, 2),
            TaxonomyEdge::unit(2, 3),
            TaxonomyEdge::unit(0, 3),
        ];
        let graph = TaxonomyGraph::build(4, &edges).unwrap();
        let depth = DepthIndex::compute(&graph).unwrap();
        assert_eq!(depth.get(3), Some(3));
    }

    #[test]
    fn test_depth_ignores_costs() {
        let edges = [TaxonomyEdge::new(0, 1, 40), TaxonomyEdge::new(1, 2, 7)];
        let graph = TaxonomyGraph::build(3, &edges).unwrap();
        let depth = DepthIndex::compute(&graph).unwrap();
        assert_eq!(depth.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_depth_edge_invariant() {
        let graph = diamond();
        let depth = DepthIndex::compute(&graph).unwrap();
        for v in 0..graph.node_count() {
            for p in graph.parents_of(v) {
                assert!(depth.get(v).unwrap() >= depth.get(p).unwrap() + 1);
            }
        }
    }

    #[test]
    fn test_deepest_prefers_first_on_tie() {
        let depth = DepthIndex::compute(&diamond()).unwrap();
        assert_eq!(depth.deepest(&[2, 1]), (2, 1));
        assert_eq!(depth.deepest(&[1, 3, 2]), (3, 2));
        assert_eq!(depth.deepest(&[]), (ROOT, 0));
        assert_eq!(depth.deepest(&[0]), (ROOT, 0));
    }

    #[test]
    fn test_root_distances_take_cheapest_path() {
        // 0 -5-> 1 -1-> 3, 0 -1-> 2 -1-> 3
        let edges = [
            TaxonomyEdge::new(0, 1, 5),
            TaxonomyEdge::new(0, 2, 1),
            TaxonomyEdge::new(1, 3, 1),
            TaxonomyEdge::new(2, 3, 1),
        ];
        let graph = TaxonomyGraph::build(4, &edges).unwrap();
        let distances = RootDistances::compute(&graph).unwrap();
        assert_eq!(distances.get(0), Some(0));
        assert_eq!(distances.get(1), Some(5));
        assert_eq!(distances.get(2), Some(1));
        assert_eq!(distances.get(3), Some(2));
        assert_eq!(distances.get(4), None);
    }

    #[test]
    fn test_root_distances_unreachable_node() {
        let graph = TaxonomyGraph::build(3, &[TaxonomyEdge::unit(0, 1)]).unwrap();
        let distances = RootDistances::compute(&graph).unwrap();
        assert_eq!(distances.get(1), Some(1));
        assert_eq!(distances.get(2), None);
    }

    #[test]
    fn test_cyclic_graph_fails() {
        let edges = [TaxonomyEdge::unit(0, 1), TaxonomyEdge::unit(1, 0)];
        let graph = TaxonomyGraph::build(2, &edges).unwrap();
        assert!(DepthIndex::compute(&graph).is_err());
        assert!(RootDistances::compute(&graph).is_err());
    }
}
