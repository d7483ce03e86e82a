/*
 * taxsim - Pairwise taxonomic similarity
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (NodeId, TaxonomyEdge, TermPair)
 * - config/      : Run configuration (metric, workers, LCA flag)
 * - features/    : Vertical slices (loader → taxonomy → similarity → report)
 *
 * Performance:
 * - Arena graph, one backward Dijkstra per ancestor cone
 * - Fixed rayon pool over disjoint pair chunks
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

// Re-exports
pub use config::{Metric, SimilarityConfig, Validatable};
pub use errors::{Result, TaxsimError};
pub use features::loader::{normalize, LabelMode, NormalizedOntology, OntologySource, RawOntology};
pub use features::report::{JsonReporter, ReportFormat, TsvReporter};
pub use features::similarity::{
    enumerate_pairs, MetricContext, PairScheduler, SimilarityMetric, SimilarityTable,
    SimilarityUseCase, WorkPartition,
};
pub use features::taxonomy::{lowest_common_ancestors, AncestryEngine, DepthIndex, TaxonomyGraph};
pub use shared::models::{Cost, NodeId, TaxonomyEdge, TermPair, ROOT};
