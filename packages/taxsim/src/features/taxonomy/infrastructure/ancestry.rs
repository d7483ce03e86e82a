//! Ancestor sets, ancestor cones and lowest common ancestors
//!
//! # Algorithm
//!
//! The reflexive ancestor cone of `v` is built with a backward Dijkstra from `v`:
//! every parent edge is relaxed in order of increasing distance, so each ancestor `a`
//! is settled with `δ(a, v)`, the cheapest cost of a downward path `a -> ... -> v`.
//!
//! Lowest common ancestors come from the proper ancestors shared by both nodes, `C`,
//! keeping the members of `C` that have no child in `C`. If `a ∈ C` had a proper
//! descendant `b ∈ C`, the child of `a` on the path to `b` would also be a common
//! ancestor, so the child test is equivalent to the pairwise descendant filter.
//!
//! `C` is empty only when one of the two nodes is the root (or the nodes are not
//! connected). A root pair reports the root itself.
//!
//! # Complexity
//! - Cone: O((k + e_k) log k) for a cone of `k` nodes and `e_k` edges
//! - LCA: two cones plus one pass over the children of each common ancestor

use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use crate::features::taxonomy::domain::TaxonomyGraph;
use crate::shared::models::{Cost, NodeId};

/// Ancestors-or-self of one node with their downward distance to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorCone {
    distances: FxHashMap<NodeId, Cost>,
}

impl AncestorCone {
    /// Whether `a` is an ancestor of the cone's node (or the node itself)
    pub fn contains(&self, a: NodeId) -> bool {
        self.distances.contains_key(&a)
    }

    /// `δ(a, v)`: cheapest cost from `a` down to the cone's node
    pub fn distance(&self, a: NodeId) -> Option<Cost> {
        self.distances.get(&a).copied()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.distances.iter().map(|(&a, &d)| (a, d))
    }

    /// Members shared with `other`, as `(a, δ(a, self), δ(a, other))`
    ///
    /// Iterates the smaller cone.
    pub fn common<'a>(
        &'a self,
        other: &'a AncestorCone,
    ) -> impl Iterator<Item = (NodeId, Cost, Cost)> + 'a {
        let swapped = self.len() > other.len();
        let (small, large) = if swapped { (other, self) } else { (self, other) };
        small.iter().filter_map(move |(a, ds)| {
            large
                .distance(a)
                .map(|dl| if swapped { (a, dl, ds) } else { (a, ds, dl) })
        })
    }
}

/// Read-only ancestry queries over a taxonomy
///
/// Holds only a borrow of the graph, so one engine can be shared by every worker.
#[derive(Debug, Clone, Copy)]
pub struct AncestryEngine<'g> {
    graph: &'g TaxonomyGraph,
}

impl<'g> AncestryEngine<'g> {
    pub fn new(graph: &'g TaxonomyGraph) -> Self {
        Self { graph }
    }

    /// Every node reachable from `v` by following parent edges, excluding `v`
    pub fn ancestor_set(&self, v: NodeId) -> BTreeSet<NodeId> {
        let mut ancestors: BTreeSet<NodeId> = self.ancestor_cone(v).iter().map(|(a, _)| a).collect();
        ancestors.remove(&v);
        ancestors
    }

    /// Reflexive ancestor cone of `v` with `δ(v, v) = 0`
    ///
    /// An out-of-range `v` yields an empty cone.
    pub fn ancestor_cone(&self, v: NodeId) -> AncestorCone {
        let mut distances: FxHashMap<NodeId, Cost> = FxHashMap::default();
        if !self.graph.contains(v) {
            return AncestorCone { distances };
        }

        let mut heap = BinaryHeap::new();
        distances.insert(v, 0);
        heap.push(Reverse((0, v)));

        while let Some(Reverse((dist, node))) = heap.pop() {
            // Stale heap entry
            if distances.get(&node).is_some_and(|&best| dist > best) {
                continue;
            }

            for (parent, cost) in self.graph.parent_edges(node) {
                let candidate = dist.saturating_add(cost);
                let improved = distances
                    .get(&parent)
                    .map_or(true, |&known| candidate < known);
                if improved {
                    distances.insert(parent, candidate);
                    heap.push(Reverse((candidate, parent)));
                }
            }
        }

        AncestorCone { distances }
    }

    /// Lowest common ancestors of `x` and `y`, ascending
    ///
    /// Minimal elements of `ancestor_set(x) ∩ ancestor_set(y)`. A node is its own
    /// lowest common ancestor, so `lca(x, x) == [x]`.
    pub fn lowest_common_ancestors(&self, x: NodeId, y: NodeId) -> Vec<NodeId> {
        if x == y {
            return if self.graph.contains(x) { vec![x] } else { Vec::new() };
        }

        let cone_x = self.ancestor_cone(x);
        let cone_y = self.ancestor_cone(y);
        let common: BTreeSet<NodeId> = cone_x
            .common(&cone_y)
            .map(|(a, _, _)| a)
            .filter(|&a| a != x && a != y)
            .collect();

        if common.is_empty() {
            // The root has no proper ancestors
            return [x, y]
                .into_iter()
                .filter(|&v| cone_x.contains(v) && cone_y.contains(v))
                .collect();
        }
        self.lowest_of(&common)
    }

    /// Members of `common` with no child in `common`, ascending
    fn lowest_of(&self, common: &BTreeSet<NodeId>) -> Vec<NodeId> {
        common
            .iter()
            .copied()
            .filter(|&a| !self.graph.children_of(a).any(|child| common.contains(&child)))
            .collect()
    }
}

/// Lowest common ancestors of `x` and `y` in `graph`, ascending
pub fn lowest_common_ancestors(graph: &TaxonomyGraph, x: NodeId, y: NodeId) -> Vec<NodeId> {
    AncestryEngine::new(graph).lowest_common_ancestors(x, y)
}
