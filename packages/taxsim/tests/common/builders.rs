//! Test data builders

use taxsim::{Cost, NodeId, TaxonomyEdge, TaxonomyGraph};

/// Builder for `TaxonomyGraph`
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    n_nodes: usize,
    edges: Vec<TaxonomyEdge>,
}

impl TaxonomyBuilder {
    pub fn new(n_nodes: usize) -> Self {
        Self {
            n_nodes,
            edges: Vec::new(),
        }
    }

    /// Add a unit-cost edge
    pub fn edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.edges.push(TaxonomyEdge::unit(from, to));
        self
    }

    pub fn weighted(mut self, from: NodeId, to: NodeId, cost: Cost) -> Self {
        self.edges.push(TaxonomyEdge::new(from, to, cost));
        self
    }

    pub fn edges(&self) -> &[TaxonomyEdge] {
        &self.edges
    }

    /// Build and check the rooted-DAG invariant
    pub fn build(self) -> TaxonomyGraph {
        let graph = TaxonomyGraph::build(self.n_nodes, &self.edges).expect("edges in range");
        graph.verify_rooted_dag().expect("single-rooted DAG");
        graph
    }
}
