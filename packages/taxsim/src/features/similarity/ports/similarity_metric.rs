use crate::errors::Result;
use crate::features::taxonomy::TaxonomyGraph;
use crate::shared::models::NodeId;

/// Scores one pair of terms
///
/// Implementations must be pure with respect to `(x, y)`: the same pair always yields
/// the same bits, whichever worker evaluates it.
pub trait SimilarityMetric: Send + Sync {
    /// Similarity of `x` and `y` in `[0, 1]`
    fn similarity(&self, graph: &TaxonomyGraph, x: NodeId, y: NodeId) -> Result<f64>;
}

impl<M: SimilarityMetric + ?Sized> SimilarityMetric for &M {
    fn similarity(&self, graph: &TaxonomyGraph, x: NodeId, y: NodeId) -> Result<f64> {
        (**self).similarity(graph, x, y)
    }
}
