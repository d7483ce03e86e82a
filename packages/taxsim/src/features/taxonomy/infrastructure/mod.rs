//! Derived taxonomy indices

pub mod ancestry;
pub mod depth;

pub use ancestry::{lowest_common_ancestors, AncestorCone, AncestryEngine};
pub use depth::{DepthIndex, RootDistances};
