//! Is-a edge

use serde::{Deserialize, Serialize};

use super::node::{Cost, NodeId};

/// Generalization edge: `from` is the more general term, `to` the more specific one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonomyEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: Cost,
}

impl TaxonomyEdge {
    pub fn new(from: NodeId, to: NodeId, cost: Cost) -> Self {
        Self { from, to, cost }
    }

    /// Edge with unit cost
    pub fn unit(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, 1)
    }
}

impl From<(NodeId, NodeId, Cost)> for TaxonomyEdge {
    fn from((from, to, cost): (NodeId, NodeId, Cost)) -> Self {
        Self::new(from, to, cost)
    }
}
