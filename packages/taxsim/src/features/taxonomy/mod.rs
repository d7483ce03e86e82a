//! Taxonomy feature
//!
//! The graph store and the read-only indices derived from it:
//! - `domain`: [`TaxonomyGraph`] and its rooted-DAG invariant
//! - `infrastructure`: depth, root distances and ancestry queries

pub mod domain;
pub mod infrastructure;

pub use domain::TaxonomyGraph;
pub use infrastructure::{
    lowest_common_ancestors, AncestorCone, AncestryEngine, DepthIndex, RootDistances,
};
