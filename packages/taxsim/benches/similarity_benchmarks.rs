//! Performance benchmarks for pairwise similarity
//!
//! - Ancestor cones and LCA sets on a deep balanced tree
//! - Full runs per metric at 1 and 4 workers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use taxsim::{
    AncestryEngine, Metric, NodeId, SimilarityConfig, SimilarityUseCase, TaxonomyEdge,
    TaxonomyGraph,
};

/// Balanced tree plus one cross edge per level so LCA sets are not all singletons
fn taxonomy(fan_out: usize, depth: u32) -> TaxonomyGraph {
    let mut edges = Vec::new();
    let mut n_nodes = 1;
    let mut level: Vec<NodeId> = vec![0];

    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fan_out);
        for &parent in &level {
            for _ in 0..fan_out {
                edges.push(TaxonomyEdge::unit(parent, n_nodes));
                next.push(n_nodes);
                n_nodes += 1;
            }
        }
        if level.len() > 1 {
            edges.push(TaxonomyEdge::new(level[0], next[next.len() - 1], 2));
        }
        level = next;
    }

    TaxonomyGraph::build(n_nodes, &edges).unwrap()
}

fn bench_ancestry(c: &mut Criterion) {
    let graph = taxonomy(4, 6);
    let engine = AncestryEngine::new(&graph);
    let leaf = graph.node_count() - 1;

    c.bench_function("ancestor_cone_leaf", |b| {
        b.iter(|| black_box(engine.ancestor_cone(black_box(leaf))))
    });

    c.bench_function("lca_leaf_pair", |b| {
        b.iter(|| black_box(engine.lowest_common_ancestors(black_box(leaf), black_box(leaf - 5))))
    });
}

fn bench_similarity_run(c: &mut Criterion) {
    let graph = taxonomy(4, 5);
    let annotated: Vec<NodeId> = (0..graph.node_count()).step_by(7).collect();
    let pairs = annotated.len() * (annotated.len() + 1) / 2;

    let mut group = c.benchmark_group("similarity_run");
    group.throughput(Throughput::Elements(pairs as u64));

    for &metric in Metric::all() {
        for workers in [1usize, 4] {
            let config = SimilarityConfig::new().metric(metric).workers(workers);
            group.bench_with_input(
                BenchmarkId::new(metric.as_str(), workers),
                &config,
                |b, config| {
                    b.iter(|| {
                        let table = SimilarityUseCase::new()
                            .run(&graph, &annotated, config)
                            .unwrap();
                        black_box(table)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_ancestry, bench_similarity_run);
criterion_main!(benches);
