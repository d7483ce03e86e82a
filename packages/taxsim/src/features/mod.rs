//! Vertical feature slices
//!
//! Dependency order: taxonomy ← similarity ← report; loader feeds taxonomy.

pub mod loader;
pub mod report;
pub mod similarity;
pub mod taxonomy;
