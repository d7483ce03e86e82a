//! JSON report

use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Write};

use super::label;
use crate::features::similarity::SimilarityTable;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metric: &'a str,
    pairs: Vec<JsonPair<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonPair<'a> {
    term1: Cow<'a, str>,
    term2: Cow<'a, str>,
    similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    lca: Option<Vec<String>>,
}

pub struct JsonReporter;

impl JsonReporter {
    pub fn write<W: Write>(out: &mut W, table: &SimilarityTable, labels: &[String]) -> io::Result<()> {
        let pairs = table
            .pairs
            .iter()
            .map(|pair| JsonPair {
                term1: label(labels, pair.x),
                term2: label(labels, pair.y),
                similarity: pair.similarity,
                lca: table.with_lca.then(|| {
                    pair.lca
                        .iter()
                        .flatten()
                        .map(|&a| label(labels, a).into_owned())
                        .collect()
                }),
            })
            .collect();

        let report = JsonReport {
            metric: table.metric.as_str(),
            pairs,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        out.flush()
    }
}
