//! Result record for one compared pair

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// One unordered pair of annotated terms and its score
///
/// `similarity` is written exactly once, by the worker that owns the pair's slot.
/// `lca` is filled by the single-threaded prepass when LCA reporting is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPair {
    pub x: NodeId,
    pub y: NodeId,
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lca: Option<Vec<NodeId>>,
}

impl TermPair {
    pub fn new(x: NodeId, y: NodeId) -> Self {
        Self {
            x,
            y,
            similarity: 0.0,
            lca: None,
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.x == self.y
    }
}
