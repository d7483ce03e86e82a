//! Custom assertions

use std::collections::BTreeSet;
use taxsim::{AncestryEngine, NodeId, SimilarityTable, TaxonomyGraph};

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Assert the score of `(x, y)` in `table`
pub fn assert_pair(table: &SimilarityTable, x: NodeId, y: NodeId, expected: f64) {
    let actual = table
        .get(x, y)
        .unwrap_or_else(|| panic!("pair ({x}, {y}) missing from table"));
    assert_close(actual, expected);
}

/// No element of `lca` is a proper ancestor of another
pub fn assert_antichain(graph: &TaxonomyGraph, lca: &[NodeId]) {
    let engine = AncestryEngine::new(graph);
    for &a in lca {
        let ancestors: BTreeSet<NodeId> = engine.ancestor_set(a);
        for &b in lca {
            assert!(
                !ancestors.contains(&b),
                "{b} is an ancestor of {a} in LCA set {lca:?}"
            );
        }
    }
}
