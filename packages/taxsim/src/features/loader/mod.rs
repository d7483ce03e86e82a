//! Loader feature - text-format taxonomies into a validated graph
//!
//! - `infrastructure`: tab-separated readers for the graph, terms and annotations files
//! - `domain`: raw records and the single-root normalization step
//!
//! Term names only exist here. Everything past [`normalize`] works on dense node ids.

pub mod domain;
pub mod infrastructure;

pub use domain::{normalize, LabelMode, NormalizedOntology, RawArc, RawOntology, RawTerm};
pub use infrastructure::OntologySource;
