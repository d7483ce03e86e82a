//! Loader infrastructure

mod reader;

pub use reader::OntologySource;
