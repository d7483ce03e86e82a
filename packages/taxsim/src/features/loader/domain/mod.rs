//! Loader domain

mod models;
mod normalize;

pub use models::{LabelMode, NormalizedOntology, RawArc, RawOntology, RawTerm};
pub use normalize::{normalize, VIRTUAL_ROOT_DESCRIPTION, VIRTUAL_ROOT_NAME};
