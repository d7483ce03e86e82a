//! Shared module - Common types used across all features
//!
//! Plain data only: ids, edges and the result record. No graph logic lives here.

pub mod models;

// Re-exports for convenience
pub use models::*;
