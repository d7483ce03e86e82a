//! Metric context and the three metric implementations
//!
//! `MetricContext` pairs the selected [`Metric`] with the auxiliary data that metric
//! reads. Everything is computed once in [`MetricContext::prepare`] and only read while
//! workers score pairs. Every metric also reads the ancestor cones of the annotated
//! nodes, one per distinct node.
//!
//! | metric | reads                         |
//! |--------|-------------------------------|
//! | tax    | root distances                |
//! | str    | depth index, max annotated depth |
//! | ps     | root distances (ancestor weight) |

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use tracing::{debug, info};

use crate::config::Metric;
use crate::errors::{Result, TaxsimError};
use crate::features::similarity::domain::scores;
use crate::features::similarity::ports::SimilarityMetric;
use crate::features::taxonomy::{AncestorCone, AncestryEngine, DepthIndex, RootDistances, TaxonomyGraph};
use crate::shared::models::{Cost, NodeId};

/// Selected metric plus its precomputed data
#[derive(Debug, Clone)]
pub struct MetricContext {
    metric: Metric,
    depth: Option<DepthIndex>,
    deepest: Option<(NodeId, u32)>,
    root_distances: Option<RootDistances>,

    /// Reflexive ancestor cone per distinct annotated node
    cones: FxHashMap<NodeId, AncestorCone>,
}

impl MetricContext {
    /// Compute exactly the data `metric` needs
    ///
    /// For the structural metric the deepest of `annotated` fixes the normalization
    /// depth.
    pub fn prepare(graph: &TaxonomyGraph, metric: Metric, annotated: &[NodeId]) -> Result<Self> {
        let mut context = Self::bare(metric);

        if metric.requires_depth() {
            let depth = DepthIndex::compute(graph)?;
            let deepest = depth.deepest(annotated);
            info!(
                "Deepest annotated node: {} (depth {})",
                deepest.0, deepest.1
            );
            context.deepest = Some(deepest);
            context.depth = Some(depth);
        } else {
            context.root_distances = Some(RootDistances::compute(graph)?);
        }

        let engine = AncestryEngine::new(graph);
        for &v in annotated {
            context
                .cones
                .entry(v)
                .or_insert_with(|| engine.ancestor_cone(v));
        }

        debug!(
            "Prepared {} metric context with {} ancestor cones",
            metric.notation(),
            context.cones.len()
        );
        Ok(context)
    }

    /// Context without auxiliary data
    ///
    /// Scoring with it fails with `Precondition`.
    pub fn bare(metric: Metric) -> Self {
        Self {
            metric,
            depth: None,
            deepest: None,
            root_distances: None,
            cones: FxHashMap::default(),
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Deepest annotated node and its depth (structural metric only)
    pub fn deepest(&self) -> Option<(NodeId, u32)> {
        self.deepest
    }

    pub fn depth_index(&self) -> Option<&DepthIndex> {
        self.depth.as_ref()
    }

    /// Number of ancestor cones computed up front
    pub fn cached_cones(&self) -> usize {
        self.cones.len()
    }

    /// Cone of `v`, from the cache when `v` was annotated
    fn cone<'a>(&'a self, engine: &AncestryEngine<'_>, v: NodeId) -> Cow<'a, AncestorCone> {
        match self.cones.get(&v) {
            Some(cone) => Cow::Borrowed(cone),
            None => Cow::Owned(engine.ancestor_cone(v)),
        }
    }

    fn root_distances(&self) -> Result<&RootDistances> {
        self.root_distances.as_ref().ok_or_else(|| {
            TaxsimError::precondition(format!(
                "{} metric invoked without root distances",
                self.metric.notation()
            ))
        })
    }

    fn depth_and_max(&self) -> Result<(&DepthIndex, u32)> {
        match (self.depth.as_ref(), self.deepest) {
            (Some(depth), Some((_, max_depth))) => Ok((depth, max_depth)),
            _ => Err(TaxsimError::precondition(format!(
                "{} metric invoked without depth index",
                self.metric.notation()
            ))),
        }
    }

    fn taxonomic(&self, cone_x: &AncestorCone, cone_y: &AncestorCone, x: NodeId, y: NodeId) -> Result<f64> {
        let distances = self.root_distances()?;
        let root_sum = root_distance(distances, x)?.saturating_add(root_distance(distances, y)?);

        let best = cone_x
            .common(cone_y)
            .map(|(_, dx, dy)| dx.saturating_add(dy))
            .min()
            .ok_or_else(|| no_common_ancestor(x, y))?;

        Ok(scores::taxonomic(best, root_sum))
    }

    fn structural(&self, cone_x: &AncestorCone, cone_y: &AncestorCone, x: NodeId, y: NodeId) -> Result<f64> {
        let (depth, max_depth) = self.depth_and_max()?;
        let depth_of = |v: NodeId| -> Result<u64> {
            depth.get(v).map(u64::from).ok_or_else(|| {
                TaxsimError::precondition(format!("node {} has no depth", v))
            })
        };
        let (dx, dy) = (depth_of(x)?, depth_of(y)?);

        let mut best: Option<u64> = None;
        for (c, _, _) in cone_x.common(cone_y) {
            let dc = depth_of(c)?;
            let gap = dx.saturating_sub(dc) + dy.saturating_sub(dc);
            best = Some(best.map_or(gap, |b| b.min(gap)));
        }
        let best = best.ok_or_else(|| no_common_ancestor(x, y))?;

        Ok(scores::structural(best, max_depth))
    }

    fn proportional(&self, cone_x: &AncestorCone, cone_y: &AncestorCone, x: NodeId, y: NodeId) -> Result<f64> {
        let mut best: Option<f64> = None;
        for (c, dx, dy) in cone_x.common(cone_y) {
            let score = scores::proportional(ancestor_weight(self, c)?, dx.saturating_add(dy));
            best = Some(best.map_or(score, |b| b.max(score)));
        }
        best.ok_or_else(|| no_common_ancestor(x, y))
    }
}

impl SimilarityMetric for MetricContext {
    fn similarity(&self, graph: &TaxonomyGraph, x: NodeId, y: NodeId) -> Result<f64> {
        let engine = AncestryEngine::new(graph);
        let cone_x = self.cone(&engine, x);
        let cone_y = if x == y { cone_x.clone() } else { self.cone(&engine, y) };

        match self.metric {
            Metric::Taxonomic => self.taxonomic(&cone_x, &cone_y, x, y),
            Metric::Structural => self.structural(&cone_x, &cone_y, x, y),
            Metric::Proportional => self.proportional(&cone_x, &cone_y, x, y),
        }
    }
}

/// Weight of a shared ancestor in the proportional metric
///
/// The cost-weighted distance of `c` from the root: a shared ancestor deep in the
/// taxonomy says more about a pair than one near the root.
pub fn ancestor_weight(context: &MetricContext, c: NodeId) -> Result<Cost> {
    root_distance(context.root_distances()?, c)
}

fn root_distance(distances: &RootDistances, v: NodeId) -> Result<Cost> {
    distances
        .get(v)
        .ok_or_else(|| TaxsimError::precondition(format!("node {} is not reachable from the root", v)))
}

fn no_common_ancestor(x: NodeId, y: NodeId) -> TaxsimError {
    TaxsimError::precondition(format!("nodes {} and {} share no ancestor", x, y))
}
