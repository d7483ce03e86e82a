//! Tab-separated input readers
//!
//! ```text
//! graph file        terms file              annotations file
//! n_nodes\tn_arcs   n                       n
//! from\tto\tcost    name\tdescription       name
//! ...               ...                     ...
//! ```
//!
//! Lines past the declared count are ignored. A trailing `\r` is stripped. Every
//! field is tab-delimited, so a term description cannot contain a tab.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{Result, TaxsimError};
use crate::features::loader::domain::{RawArc, RawOntology, RawTerm};
use crate::shared::models::Cost;

/// Paths of the three input files
#[derive(Debug, Clone, Copy)]
pub struct OntologySource<'a> {
    pub graph: &'a Path,
    pub terms: &'a Path,
    pub annotations: &'a Path,
}

impl<'a> OntologySource<'a> {
    pub fn new(graph: &'a Path, terms: &'a Path, annotations: &'a Path) -> Self {
        Self {
            graph,
            terms,
            annotations,
        }
    }

    /// Read and parse all three files
    pub fn read(&self) -> Result<RawOntology> {
        let mut graph = LineReader::open(self.graph)?;
        let mut terms = LineReader::open(self.terms)?;
        let mut annotations = LineReader::open(self.annotations)?;
        read_all(&mut graph, &mut terms, &mut annotations)
    }
}

impl RawOntology {
    /// Parse the three formats from in-memory readers
    pub fn from_readers(graph: impl BufRead, terms: impl BufRead, annotations: impl BufRead) -> Result<Self> {
        read_all(
            &mut LineReader::new("graph", graph),
            &mut LineReader::new("terms", terms),
            &mut LineReader::new("annotations", annotations),
        )
    }
}

fn read_all<G, T, A>(
    graph: &mut LineReader<G>,
    terms: &mut LineReader<T>,
    annotations: &mut LineReader<A>,
) -> Result<RawOntology>
where
    G: BufRead,
    T: BufRead,
    A: BufRead,
{
    let (n_nodes, arcs) = read_graph(graph)?;
    Ok(RawOntology {
        n_nodes,
        arcs,
        terms: read_terms(terms)?,
        annotations: read_annotations(annotations)?,
    })
}

fn read_graph<R: BufRead>(reader: &mut LineReader<R>) -> Result<(usize, Vec<RawArc>)> {
    let header = reader.expect_line("header `n_nodes<TAB>n_arcs`")?;
    let fields = split_fields(&header);
    let [n_nodes, n_arcs] = fields.as_slice() else {
        return Err(reader.error(format!("expected 2 header fields, found {}", fields.len())));
    };
    let n_nodes: usize = reader.parse_count(n_nodes, "node count")?;
    let n_arcs: usize = reader.parse_count(n_arcs, "arc count")?;

    let mut arcs = Vec::with_capacity(n_arcs);
    for found in 0..n_arcs {
        let line = reader.next_line()?.ok_or_else(|| {
            reader.error(format!("expected {} arcs, found {}", n_arcs, found))
        })?;
        let fields = split_fields(&line);
        let [from, to, cost] = fields.as_slice() else {
            return Err(reader.error(format!("expected 3 fields, found {}", fields.len())));
        };
        if from.is_empty() || to.is_empty() {
            return Err(reader.error("arc endpoint is empty"));
        }
        let cost: Cost = cost.trim().parse().map_err(|_| {
            reader.error(format!("cost '{}' is not a non-negative integer", cost))
        })?;
        arcs.push(RawArc::new(*from, *to, cost));
    }

    Ok((n_nodes, arcs))
}

fn read_terms<R: BufRead>(reader: &mut LineReader<R>) -> Result<Vec<RawTerm>> {
    let header = reader.expect_line("term count")?;
    let n: usize = reader.parse_count(header.trim(), "term count")?;

    let mut terms = Vec::with_capacity(n);
    for found in 0..n {
        let line = reader
            .next_line()?
            .ok_or_else(|| reader.error(format!("expected {} terms, found {}", n, found)))?;
        let fields = split_fields(&line);
        let [name, description] = fields.as_slice() else {
            return Err(reader.error(format!(
                "expected `name<TAB>description`, found {} field(s)",
                fields.len()
            )));
        };
        if name.is_empty() || description.is_empty() {
            return Err(reader.error("term name and description must not be empty"));
        }
        terms.push(RawTerm::new(*name, *description));
    }

    Ok(terms)
}

fn read_annotations<R: BufRead>(reader: &mut LineReader<R>) -> Result<Vec<String>> {
    let header = reader.expect_line("annotation count")?;
    let n: usize = reader.parse_count(header.trim(), "annotation count")?;

    let mut names = Vec::with_capacity(n);
    for found in 0..n {
        let line = reader
            .next_line()?
            .ok_or_else(|| reader.error(format!("expected {} annotations, found {}", n, found)))?;
        let name = line.trim();
        if name.is_empty() {
            return Err(reader.error("annotation is empty"));
        }
        names.push(name.to_string());
    }

    Ok(names)
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}

/// Line iterator that remembers where it is for error messages
struct LineReader<R> {
    source_name: String,
    line: usize,
    inner: R,
}

impl LineReader<BufReader<File>> {
    fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            TaxsimError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    fn new(source_name: impl Into<String>, inner: R) -> Self {
        Self {
            source_name: source_name.into(),
            line: 0,
            inner,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }

    fn expect_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| self.error(format!("missing {}", what)))
    }

    fn parse_count(&self, field: &str, what: &str) -> Result<usize> {
        field
            .trim()
            .parse()
            .map_err(|_| self.error(format!("{} '{}' is not a non-negative integer", what, field)))
    }

    fn error(&self, message: impl Into<String>) -> TaxsimError {
        TaxsimError::parse(self.source_name.clone(), self.line.max(1), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(graph: &str, terms: &str, annotations: &str) -> Result<RawOntology> {
        RawOntology::from_readers(graph.as_bytes(), terms.as_bytes(), annotations.as_bytes())
    }

    #[test]
    fn test_parse_all_three() {
        let raw = parse(
            "3\t2\ntop\ta\t1\ntop\tb\t4\n",
            "3\ntop\tTop term\na\tTerm A\nb\tTerm B\n",
            "2\na\nb\n",
        )
        .unwrap();

        assert_eq!(raw.n_nodes, 3);
        assert_eq!(
            raw.arcs,
            vec![RawArc::new("top", "a", 1), RawArc::new("top", "b", 4)]
        );
        assert_eq!(raw.terms[1], RawTerm::new("a", "Term A"));
        assert_eq!(raw.annotations, vec!["a", "b"]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let raw = parse("2\t1\r\ntop\ta\t1", "2\r\ntop\tT\r\na\tA", "1\r\na").unwrap();
        assert_eq!(raw.arcs, vec![RawArc::new("top", "a", 1)]);
        assert_eq!(raw.terms[1], RawTerm::new("a", "A"));
        assert_eq!(raw.annotations, vec!["a"]);
    }

    #[test]
    fn test_extra_lines_ignored() {
        let raw = parse("2\t1\ntop\ta\t1\njunk\n", "2\ntop\tT\na\tA\n", "1\na\nb\n").unwrap();
        assert_eq!(raw.arcs.len(), 1);
        assert_eq!(raw.annotations.len(), 1);
    }

    #[test]
    fn test_too_few_arcs() {
        let err = parse("2\t2\ntop\ta\t1\n", "2\ntop\tT\na\tA\n", "0\n").unwrap_err();
        assert!(err.to_string().contains("expected 2 arcs, found 1"));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = parse("2\t1\ntop\ta\t-3\n", "2\ntop\tT\na\tA\n", "0\n").unwrap_err();
        match err {
            TaxsimError::Parse { source_name, line, .. } => {
                assert_eq!(source_name, "graph");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_arc_line() {
        let err = parse("2\t1\ntop a 1\n", "2\ntop\tT\na\tA\n", "0\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 fields, found 1"));
    }

    #[test]
    fn test_bad_header() {
        assert!(parse("two\t1\n", "0\n", "0\n").is_err());
        assert!(parse("", "0\n", "0\n").is_err());
        assert!(parse("2\n", "0\n", "0\n").is_err());
    }

    #[test]
    fn test_term_without_description() {
        let err = parse("1\t0\n", "1\ntop\n", "0\n").unwrap_err();
        assert!(err.to_string().contains("name<TAB>description"));
    }

    #[test]
    fn test_term_with_extra_field_rejected() {
        let err = parse("1\t0\n", "1\ntop\tTop\tterm\n", "0\n").unwrap_err();
        match err {
            TaxsimError::Parse { source_name, line, message } => {
                assert_eq!(source_name, "terms");
                assert_eq!(line, 2);
                assert!(message.contains("found 3 field(s)"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_few_annotations() {
        let err = parse("1\t0\n", "1\ntop\tT\n", "2\ntop\n").unwrap_err();
        assert!(err.to_string().contains("expected 2 annotations, found 1"));
    }
}
