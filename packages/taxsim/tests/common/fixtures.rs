//! Taxonomy fixtures

use super::builders::TaxonomyBuilder;
use taxsim::{NodeId, TaxonomyGraph};

/// root(0) -> a(1), root(0) -> b(2), a(1) -> c(3), b(2) -> c(3)
pub fn diamond() -> TaxonomyGraph {
    TaxonomyBuilder::new(4)
        .edge(0, 1)
        .edge(0, 2)
        .edge(1, 3)
        .edge(2, 3)
        .build()
}

pub const DIAMOND_ANNOTATED: [NodeId; 3] = [1, 2, 3];

pub fn diamond_labels() -> Vec<String> {
    ["root", "a", "b", "c"].iter().map(|s| s.to_string()).collect()
}

/// Balanced tree of the given fan-out and depth, ids in BFS order
pub fn balanced_tree(fan_out: usize, depth: u32) -> TaxonomyGraph {
    let mut n_nodes = 1;
    let mut level_start = 0;
    let mut level_len = 1;
    let mut builder_edges = Vec::new();

    for _ in 0..depth {
        let next_start = n_nodes;
        for parent in level_start..level_start + level_len {
            for _ in 0..fan_out {
                builder_edges.push((parent, n_nodes));
                n_nodes += 1;
            }
        }
        level_start = next_start;
        level_len *= fan_out;
    }

    builder_edges
        .into_iter()
        .fold(TaxonomyBuilder::new(n_nodes), |b, (from, to)| b.edge(from, to))
        .build()
}

/// Graph file, terms file and annotations file for the diamond
pub fn diamond_files() -> (&'static str, &'static str, &'static str) {
    (
        "4\t4\nroot\ta\t1\nroot\tb\t1\na\tc\t1\nb\tc\t1\n",
        "4\nroot\tRoot term\na\tTerm A\nb\tTerm B\nc\tTerm C\n",
        "3\na\nb\nc\n",
    )
}
