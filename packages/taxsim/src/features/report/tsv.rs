//! Tab-separated report

use std::io::{self, Write};

use super::label;
use crate::features::similarity::SimilarityTable;

pub struct TsvReporter;

impl TsvReporter {
    /// One row per pair in enumeration order, score with 5 decimals
    ///
    /// With LCAs each ancestor label is appended as `\t{label}\t`.
    pub fn write<W: Write>(out: &mut W, table: &SimilarityTable, labels: &[String]) -> io::Result<()> {
        if table.with_lca {
            write!(out, "\nTerm1\tTerm2\tSimilarity\tLCA\n\n")?;
        } else {
            write!(out, "\nTerm1\tTerm2\tSimilarity\n\n")?;
        }

        for pair in &table.pairs {
            write!(
                out,
                "{}\t{}\t{:.5}",
                label(labels, pair.x),
                label(labels, pair.y),
                pair.similarity
            )?;
            if table.with_lca {
                for &a in pair.lca.iter().flatten() {
                    write!(out, "\t{}\t", label(labels, a))?;
                }
            }
            writeln!(out)?;
        }

        out.flush()
    }
}
