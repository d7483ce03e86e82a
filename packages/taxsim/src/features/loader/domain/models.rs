//! Loader records

use serde::{Deserialize, Serialize};

use crate::features::taxonomy::TaxonomyGraph;
use crate::shared::models::{Cost, NodeId};

/// Arc as written in the graph file, endpoints still by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArc {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

impl RawArc {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: Cost) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }
}

/// Row of the terms file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTerm {
    pub name: String,
    pub description: String,
}

impl RawTerm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// The three input files, parsed but not yet checked against each other
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOntology {
    /// Node count declared in the graph file header
    pub n_nodes: usize,
    pub arcs: Vec<RawArc>,
    pub terms: Vec<RawTerm>,
    pub annotations: Vec<String>,
}

/// Which term column becomes the display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelMode {
    #[default]
    Names,
    Descriptions,
}

/// A single-rooted taxonomy ready for scoring
#[derive(Debug, Clone)]
pub struct NormalizedOntology {
    pub graph: TaxonomyGraph,

    /// Display label per node id
    pub labels: Vec<String>,

    /// Annotated terms as node ids, in file order
    pub annotated: Vec<NodeId>,

    /// Whether a virtual root was inserted at id 0
    pub virtual_root: bool,
}

impl NormalizedOntology {
    pub fn label(&self, v: NodeId) -> Option<&str> {
        self.labels.get(v).map(String::as_str)
    }
}
