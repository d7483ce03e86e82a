//! Pair enumeration and parallel scoring
//!
//! # Partitioning
//!
//! ```text
//! pairs:  [ chunk 0 | chunk 1 | ... | chunk W-1 | remainder ]
//!           worker 0  worker 1        worker W-1  coordinator
//! ```
//!
//! With `P` pairs and `W = min(workers, P)` workers, each worker owns exactly
//! `floor(P / W)` consecutive pairs and the coordinating thread scores the
//! `P mod W` pairs left at the tail. Every chunk is a disjoint `&mut [TermPair]`, so
//! no slot can be written twice.

use std::any::Any;
use std::ops::Range;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use crate::config::MAX_WORKERS;
use crate::errors::{Result, TaxsimError};
use crate::features::similarity::ports::SimilarityMetric;
use crate::features::taxonomy::TaxonomyGraph;
use crate::shared::models::{NodeId, TermPair};

/// All unordered pairs of `annotated`, self-pairs included, row-major
///
/// `(a[i], a[j])` for `0 <= i <= j < n`, giving `n(n+1)/2` pairs. Duplicate
/// annotations produce duplicate pairs.
pub fn enumerate_pairs(annotated: &[NodeId]) -> Vec<TermPair> {
    let n = annotated.len();
    let mut pairs = Vec::with_capacity(n * (n + 1) / 2);
    for (i, &x) in annotated.iter().enumerate() {
        for &y in &annotated[i..] {
            pairs.push(TermPair::new(x, y));
        }
    }
    pairs
}

/// Static split of `total` pairs over a worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPartition {
    total: usize,
    workers: usize,
    chunk_len: usize,
}

impl WorkPartition {
    /// Clamp `workers` to `total` and size the chunks
    ///
    /// `total == 0` yields zero workers.
    pub fn new(total: usize, workers: usize) -> Self {
        let workers = workers.min(total);
        let chunk_len = if workers == 0 { 0 } else { total / workers };
        Self {
            total,
            workers,
            chunk_len,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Effective worker count
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Pairs per worker
    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Index range owned by each worker, in worker order
    pub fn ranges(&self) -> Vec<Range<usize>> {
        (0..self.workers)
            .map(|w| w * self.chunk_len..(w + 1) * self.chunk_len)
            .collect()
    }

    /// Tail range scored by the coordinator
    pub fn remainder(&self) -> Range<usize> {
        self.workers * self.chunk_len..self.total
    }
}

/// Scores a pair table on a fixed-size worker pool
#[derive(Debug, Clone, Copy)]
pub struct PairScheduler {
    workers: usize,
}

impl PairScheduler {
    /// Scheduler with `workers` pool threads
    ///
    /// Zero workers is a configuration error. More than `MAX_WORKERS` is clamped.
    ///
    /// `SimilarityUseCase::run` validates its config first and rejects oversized
    /// counts there, so the clamp only applies to direct callers such as
    /// `SimilarityUseCase::score`.
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(TaxsimError::configuration(
                "worker count must be at least 1",
            ));
        }
        let workers = if workers > MAX_WORKERS {
            warn!(
                "Requested {} workers; clamping to {}",
                workers, MAX_WORKERS
            );
            MAX_WORKERS
        } else {
            workers
        };
        Ok(Self { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Partition this scheduler would use for `total` pairs
    pub fn partition(&self, total: usize) -> WorkPartition {
        WorkPartition::new(total, self.workers)
    }

    /// Score every pair in place
    ///
    /// Returns once all workers have joined. On failure the first error in chunk
    /// order is returned (the coordinator's remainder counts as the last chunk and
    /// reports worker index `W`); a panicking worker becomes `WorkerFailure`.
    pub fn evaluate<M>(&self, graph: &TaxonomyGraph, pairs: &mut [TermPair], metric: &M) -> Result<()>
    where
        M: SimilarityMetric + ?Sized,
    {
        let partition = self.partition(pairs.len());
        if partition.total() == 0 {
            debug!("No pairs to score");
            return Ok(());
        }

        let start = Instant::now();
        let pool = ThreadPoolBuilder::new()
            .num_threads(partition.workers())
            .thread_name(|i| format!("taxsim-worker-{}", i))
            .build()
            .map_err(|e| TaxsimError::configuration(format!("failed to build worker pool: {}", e)))?;

        let coordinator = partition.workers();
        let (worker_span, tail) = pairs.split_at_mut(partition.remainder().start);
        let mut outcomes: Vec<Result<()>> = (0..partition.workers()).map(|_| Ok(())).collect();

        let assignments = worker_span
            .chunks_mut(partition.chunk_len())
            .enumerate()
            .zip(outcomes.iter_mut());

        let tail_outcome = pool.in_place_scope(move |scope| {
            for ((worker, chunk), outcome) in assignments {
                scope.spawn(move |_| {
                    *outcome = score_guarded(worker, graph, chunk, metric);
                });
            }

            score_guarded(coordinator, graph, tail, metric)
        });

        debug!(
            "Scored {} pairs on {} workers (+{} on coordinator) in {:?}",
            partition.total(),
            partition.workers(),
            partition.remainder().len(),
            start.elapsed()
        );

        outcomes.into_iter().chain(std::iter::once(tail_outcome)).collect()
    }
}

/// Score one chunk, turning a panic into `WorkerFailure`
fn score_guarded<M>(worker: usize, graph: &TaxonomyGraph, chunk: &mut [TermPair], metric: &M) -> Result<()>
where
    M: SimilarityMetric + ?Sized,
{
    match catch_unwind(AssertUnwindSafe(|| score_chunk(graph, chunk, metric))) {
        Ok(result) => result,
        Err(payload) => Err(TaxsimError::worker_failure(worker, panic_message(payload.as_ref()))),
    }
}

fn score_chunk<M>(graph: &TaxonomyGraph, chunk: &mut [TermPair], metric: &M) -> Result<()>
where
    M: SimilarityMetric + ?Sized,
{
    for pair in chunk.iter_mut() {
        pair.similarity = metric.similarity(graph, pair.x, pair.y)?;
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {}", message)
    } else {
        "panicked".to_string()
    }
}
