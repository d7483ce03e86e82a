//! Taxonomy domain model

mod graph;

pub use graph::TaxonomyGraph;
