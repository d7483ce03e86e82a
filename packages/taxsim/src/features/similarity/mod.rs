//! Similarity feature - pairwise scoring of annotated terms
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Similarity Feature                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Domain:                                                     │
//! │    - Score formulas (tax, str, ps), clamped to [0, 1]        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Ports:                                                      │
//! │    - SimilarityMetric (what the scheduler calls per pair)    │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Infrastructure:                                             │
//! │    - MetricContext (metric + precomputed auxiliary data)     │
//! │    - PairScheduler (fixed rayon pool, exclusive chunks)      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Application:                                                │
//! │    - SimilarityUseCase (enumerate, LCA prepass, score)       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{SimilarityTable, SimilarityUseCase};
pub use infrastructure::{
    ancestor_weight, enumerate_pairs, MetricContext, PairScheduler, WorkPartition,
};
pub use ports::SimilarityMetric;
