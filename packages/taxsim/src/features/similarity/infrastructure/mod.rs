//! Similarity infrastructure

pub mod metrics;
pub mod scheduler;

pub use metrics::{ancestor_weight, MetricContext};
pub use scheduler::{enumerate_pairs, PairScheduler, WorkPartition};
