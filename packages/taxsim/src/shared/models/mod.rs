//! Shared models

mod edge;
mod node;
mod term_pair;

pub use edge::TaxonomyEdge;
pub use node::{Cost, NodeId, ROOT, ROOT_EDGE_COST};
pub use term_pair::TermPair;
