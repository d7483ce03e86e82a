//! Taxonomy graph store (petgraph arena)
//!
//! Immutable after `build`. Node index `i` of the underlying `DiGraph` is node id `i`,
//! so traversal is index hopping over dense adjacency lists. Workers share the graph
//! through `&TaxonomyGraph` without locks because nothing mutates it after construction.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use crate::errors::{Result, TaxsimError};
use crate::shared::models::{Cost, NodeId, TaxonomyEdge, ROOT};

/// Single-rooted is-a taxonomy
///
/// Directed graph where:
/// - Nodes are dense term ids
/// - Edges point from the more general term to the more specific one
#[derive(Debug, Clone)]
pub struct TaxonomyGraph {
    graph: DiGraph<(), Cost>,
}

impl TaxonomyGraph {
    /// Build the graph from a node count and an edge list
    ///
    /// Fails with `Configuration` if an edge references a node id outside
    /// `[0, n_nodes)`. Rooting and acyclicity are checked separately by
    /// [`verify_rooted_dag`](Self::verify_rooted_dag).
    pub fn build(n_nodes: usize, edges: &[TaxonomyEdge]) -> Result<Self> {
        if n_nodes >= u32::MAX as usize {
            return Err(TaxsimError::configuration(format!(
                "taxonomy has {} nodes; at most {} are supported",
                n_nodes,
                u32::MAX - 1
            )));
        }

        let mut graph = DiGraph::with_capacity(n_nodes, edges.len());
        for _ in 0..n_nodes {
            graph.add_node(());
        }

        for (position, edge) in edges.iter().enumerate() {
            if edge.from >= n_nodes || edge.to >= n_nodes {
                return Err(TaxsimError::configuration(format!(
                    "edge #{} ({} -> {}) references a node outside 0..{}",
                    position, edge.from, edge.to, n_nodes
                )));
            }
            graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), edge.cost);
        }

        debug!(
            "Built taxonomy graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self { graph })
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count (one per supplied triple, parallel edges included)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `v` is a valid node id
    pub fn contains(&self, v: NodeId) -> bool {
        v < self.graph.node_count()
    }

    /// Direct specializations of `v`
    pub fn children_of(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(v), Direction::Outgoing)
            .map(|idx| idx.index())
    }

    /// Direct generalizations of `v`
    pub fn parents_of(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(v), Direction::Incoming)
            .map(|idx| idx.index())
    }

    /// Incoming edges of `v` as `(parent, cost)`
    pub fn parent_edges(&self, v: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(v), Direction::Incoming)
            .map(|edge| (edge.source().index(), *edge.weight()))
    }

    /// Cost of the edge `from -> to`
    ///
    /// With parallel edges the cheapest one wins. Returns `None` if there is no edge.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.graph
            .edges_connecting(NodeIndex::new(from), NodeIndex::new(to))
            .map(|edge| *edge.weight())
            .min()
    }

    /// Nodes without incoming edges, ascending
    pub fn roots(&self) -> Vec<NodeId> {
        let mut roots: Vec<NodeId> = self
            .graph
            .externals(Direction::Incoming)
            .map(|idx| idx.index())
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Compute topological order using Kahn's algorithm
    ///
    /// Every node appears after all of its parents. Among the nodes whose parents are
    /// all placed, the smallest id goes next, so the order is reproducible. Fails with `Configuration` if the graph has a cycle.
    pub fn topological_order(&self) -> Result<Vec<NodeId>> {
        let n = self.node_count();
        let mut in_degree: Vec<usize> = vec![0; n];
        for edge in self.graph.edge_references() {
            in_degree[edge.target().index()] += 1;
        }

        // Min-heap on id: of all ready nodes the smallest goes first
        let mut ready: BinaryHeap<Reverse<NodeId>> =
            (0..n).filter(|&v| in_degree[v] == 0).map(Reverse).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(Reverse(v)) = ready.pop() {
            order.push(v);

            for child in self.children_of(v) {
                in_degree[child] -= 1;
                if in_degree[child] == 0 {
                    ready.push(Reverse(child));
                }
            }
        }

        if order.len() < n {
            return Err(TaxsimError::configuration(format!(
                "taxonomy contains a directed cycle through nodes {:?}",
                self.find_cycle()
            )));
        }

        Ok(order)
    }

    /// Check the single-root and acyclicity invariants
    ///
    /// The normalization step calls this before handing the graph to the core. Nothing
    /// downstream re-checks it.
    pub fn verify_rooted_dag(&self) -> Result<()> {
        if self.node_count() == 0 {
            return Err(TaxsimError::configuration("taxonomy has no nodes"));
        }

        let roots = self.roots();
        if roots.as_slice() != [ROOT] {
            return Err(TaxsimError::configuration(format!(
                "taxonomy must have exactly one root at id {}; found roots {:?}",
                ROOT, roots
            )));
        }

        self.topological_order().map(|_| ())
    }

    /// Members of one directed cycle, ascending (empty if acyclic)
    fn find_cycle(&self) -> Vec<NodeId> {
        // Strongly connected components with more than one node are cycles
        for scc in tarjan_scc(&self.graph) {
            let is_cycle = scc.len() > 1
                || scc
                    .first()
                    .map(|&idx| self.graph.contains_edge(idx, idx))
                    .unwrap_or(false);
            if is_cycle {
                let mut members: Vec<NodeId> = scc.into_iter().map(|idx| idx.index()).collect();
                members.sort_unstable();
                return members;
            }
        }
        Vec::new()
    }
}
