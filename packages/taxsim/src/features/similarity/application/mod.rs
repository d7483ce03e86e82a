//! Similarity application layer

mod similarity_usecase;

pub use similarity_usecase::{SimilarityTable, SimilarityUseCase};
