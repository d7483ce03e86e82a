//! Similarity ports
//!
//! The scheduler only knows [`SimilarityMetric`]; the concrete metric and its
//! auxiliary data stay behind it.

pub mod similarity_metric;

pub use similarity_metric::SimilarityMetric;
