//! Single-root normalization
//!
//! Turns a [`RawOntology`] into a [`NormalizedOntology`] whose graph has exactly one
//! root, at id 0:
//! - one root term: it trades places with the term at position 0
//! - several root terms: a virtual `ROOT` term is inserted at 0 and every former
//!   root hangs off it with a unit-cost arc
//!
//! A root term is one that never appears as an arc target. Isolated terms count.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use super::models::{LabelMode, NormalizedOntology, RawArc, RawOntology, RawTerm};
use crate::errors::{Result, TaxsimError};
use crate::features::taxonomy::TaxonomyGraph;
use crate::shared::models::{NodeId, TaxonomyEdge, ROOT, ROOT_EDGE_COST};

/// Name of the synthesized root term
pub const VIRTUAL_ROOT_NAME: &str = "ROOT";

/// Description of the synthesized root term
pub const VIRTUAL_ROOT_DESCRIPTION: &str = "Ontology Root";

/// Resolve names, enforce the single-root invariant and build the graph
pub fn normalize(raw: RawOntology, mode: LabelMode) -> Result<NormalizedOntology> {
    let RawOntology {
        n_nodes,
        mut arcs,
        mut terms,
        annotations,
    } = raw;

    if terms.len() != n_nodes {
        return Err(TaxsimError::configuration(format!(
            "graph declares {} nodes but the terms file lists {}",
            n_nodes,
            terms.len()
        )));
    }
    if terms.is_empty() {
        return Err(TaxsimError::configuration("taxonomy has no terms"));
    }
    check_unique_names(&terms)?;

    let roots = find_roots(&terms, &arcs);
    let virtual_root = match roots.as_slice() {
        [] => {
            return Err(TaxsimError::configuration(
                "every term has a parent; the taxonomy contains a cycle",
            ))
        }
        [single] => {
            terms.swap(ROOT, *single);
            false
        }
        several => {
            debug!("Found {} roots; inserting virtual root", several.len());
            let names: Vec<String> = several.iter().map(|&i| terms[i].name.clone()).collect();
            terms.insert(ROOT, RawTerm::new(VIRTUAL_ROOT_NAME, VIRTUAL_ROOT_DESCRIPTION));
            check_unique_names(&terms)?;
            arcs.extend(
                names
                    .into_iter()
                    .map(|name| RawArc::new(VIRTUAL_ROOT_NAME, name, ROOT_EDGE_COST)),
            );
            true
        }
    };

    let ids: FxHashMap<&str, NodeId> = terms
        .iter()
        .enumerate()
        .map(|(id, term)| (term.name.as_str(), id))
        .collect();
    let resolve = |name: &str, role: &str| -> Result<NodeId> {
        ids.get(name).copied().ok_or_else(|| {
            TaxsimError::configuration(format!("{} '{}' is not a known term", role, name))
        })
    };

    let edges = arcs
        .iter()
        .map(|arc| {
            Ok(TaxonomyEdge::new(
                resolve(&arc.from, "arc source")?,
                resolve(&arc.to, "arc target")?,
                arc.cost,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    let annotated = annotations
        .iter()
        .map(|name| resolve(name, "annotation"))
        .collect::<Result<Vec<_>>>()?;

    let graph = TaxonomyGraph::build(terms.len(), &edges)?;
    graph.verify_rooted_dag()?;

    let labels = terms
        .into_iter()
        .map(|term| match mode {
            LabelMode::Names => term.name,
            LabelMode::Descriptions => term.description,
        })
        .collect();

    info!(
        "Loaded taxonomy: {} terms, {} arcs, {} annotations{}",
        graph.node_count(),
        graph.edge_count(),
        annotated.len(),
        if virtual_root { " (virtual root)" } else { "" }
    );

    Ok(NormalizedOntology {
        graph,
        labels,
        annotated,
        virtual_root,
    })
}

fn check_unique_names(terms: &[RawTerm]) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for term in terms {
        if !seen.insert(term.name.as_str()) {
            return Err(TaxsimError::configuration(format!(
                "term '{}' is listed more than once",
                term.name
            )));
        }
    }
    Ok(())
}

/// Positions of terms that are never an arc target, in term order
fn find_roots(terms: &[RawTerm], arcs: &[RawArc]) -> Vec<usize> {
    let targets: FxHashSet<&str> = arcs.iter().map(|arc| arc.to.as_str()).collect();
    terms
        .iter()
        .enumerate()
        .filter(|(_, term)| !targets.contains(term.name.as_str()))
        .map(|(i, _)| i)
        .collect()
}
