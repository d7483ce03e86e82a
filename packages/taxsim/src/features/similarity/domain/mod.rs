//! Similarity domain: the score formulas

pub mod scores;

pub use scores::{clamp_unit, proportional, structural, taxonomic};
