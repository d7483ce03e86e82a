//! Similarity UseCase Implementation
//!
//! One run, in order:
//! 1. Validate the configuration and the annotated ids
//! 2. Enumerate pairs (row-major upper triangle)
//! 3. LCA prepass, single-threaded, when requested
//! 4. Prepare the metric context
//! 5. Score on the worker pool

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::{Metric, SimilarityConfig, Validatable};
use crate::errors::{Result, TaxsimError};
use crate::features::similarity::infrastructure::{enumerate_pairs, MetricContext, PairScheduler};
use crate::features::similarity::ports::SimilarityMetric;
use crate::features::taxonomy::{AncestryEngine, TaxonomyGraph};
use crate::shared::models::{NodeId, TermPair};

/// Output of one similarity run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityTable {
    pub metric: Metric,

    /// Scored pairs in enumeration order
    pub pairs: Vec<TermPair>,

    /// Deepest annotated node and its depth (structural metric only)
    pub deepest: Option<(NodeId, u32)>,

    /// Whether every pair carries its lowest common ancestors
    pub with_lca: bool,
}

impl SimilarityTable {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Score of the pair `(x, y)` in either order, if it was enumerated
    pub fn get(&self, x: NodeId, y: NodeId) -> Option<f64> {
        self.pairs
            .iter()
            .find(|p| (p.x == x && p.y == y) || (p.x == y && p.y == x))
            .map(|p| p.similarity)
    }
}

/// Runs the similarity pipeline over a validated taxonomy
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilarityUseCase;

impl SimilarityUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Score every pair of `annotated` under `config`
    pub fn run(
        &self,
        graph: &TaxonomyGraph,
        annotated: &[NodeId],
        config: &SimilarityConfig,
    ) -> Result<SimilarityTable> {
        config.validate()?;
        check_annotated(graph, annotated)?;

        let start = Instant::now();
        let context = MetricContext::prepare(graph, config.metric, annotated)?;
        let pairs = self.score(graph, annotated, config, &context)?;

        info!(
            "Computed {} {} similarities in {:?}",
            pairs.len(),
            config.metric.notation(),
            start.elapsed()
        );

        Ok(SimilarityTable {
            metric: config.metric,
            pairs,
            deepest: context.deepest(),
            with_lca: config.with_lca,
        })
    }

    /// Enumerate, optionally attach LCAs, and score with an already prepared metric
    ///
    /// `config` is not validated here. A worker count above `MAX_WORKERS` is clamped
    /// by the scheduler instead of rejected.
    pub fn score<M>(
        &self,
        graph: &TaxonomyGraph,
        annotated: &[NodeId],
        config: &SimilarityConfig,
        metric: &M,
    ) -> Result<Vec<TermPair>>
    where
        M: SimilarityMetric + ?Sized,
    {
        let mut pairs = enumerate_pairs(annotated);
        debug!("Enumerated {} pairs over {} annotated terms", pairs.len(), annotated.len());

        if config.with_lca {
            attach_lowest_common_ancestors(graph, &mut pairs);
        }

        let scheduler = PairScheduler::new(config.workers)?;
        info!(
            "Scoring with {} worker(s)",
            scheduler.partition(pairs.len()).workers()
        );
        scheduler.evaluate(graph, &mut pairs, metric)?;

        Ok(pairs)
    }
}

/// Fill `lca` on every pair
fn attach_lowest_common_ancestors(graph: &TaxonomyGraph, pairs: &mut [TermPair]) {
    let engine = AncestryEngine::new(graph);
    let start = Instant::now();
    for pair in pairs.iter_mut() {
        pair.lca = Some(engine.lowest_common_ancestors(pair.x, pair.y));
    }
    debug!("LCA prepass over {} pairs took {:?}", pairs.len(), start.elapsed());
}

fn check_annotated(graph: &TaxonomyGraph, annotated: &[NodeId]) -> Result<()> {
    match annotated.iter().find(|&&v| !graph.contains(v)) {
        Some(&v) => Err(TaxsimError::configuration(format!(
            "annotated node {} is outside 0..{}",
            v,
            graph.node_count()
        ))),
        None => Ok(()),
    }
}
