//! Plain-text graph format.
//!
//! ```text
//! <order> <size>
//! <u> <v> [<u> <v> ...]
//! ...
//! ```
//!
//! The declared `size` is informational only; the arc count of the loaded
//! graph is derived from the edges actually read. Blank lines and lines
//! starting with `#` are skipped.

use super::types::Graph;
use crate::error::{DrdError, Result};
use std::fmt::Write as _;
use std::path::Path;

impl Graph {
    /// Parses a graph from the text format.
    pub fn parse(text: &str, directed: bool) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (header_line, header) = lines.next().ok_or(DrdError::Parse {
            line: 1,
            message: "missing header".into(),
        })?;
        let header_fields = parse_numbers(header, header_line)?;
        if header_fields.len() != 2 {
            return Err(DrdError::Parse {
                line: header_line,
                message: format!("header needs `order size`, got {} fields", header_fields.len()),
            });
        }
        let order = header_fields[0];
        if order == 0 {
            return Err(DrdError::EmptyGraph);
        }

        let mut edges = Vec::new();
        for (line, content) in lines {
            let numbers = parse_numbers(content, line)?;
            if numbers.len() % 2 != 0 {
                return Err(DrdError::Parse {
                    line,
                    message: "odd number of vertex ids".into(),
                });
            }
            edges.extend(numbers.chunks_exact(2).map(|pair| (pair[0], pair[1])));
        }

        tracing::debug!(order, edges = edges.len(), "parsed graph text");
        Graph::from_edges(order, directed, &edges)
    }

    /// Reads and parses a graph file.
    pub fn from_path<P: AsRef<Path>>(path: P, directed: bool) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, directed)
    }

    /// Renders the live graph in the text format.
    ///
    /// Vertex ids are written as-is, so a graph with removed vertices keeps
    /// its original id range in the header.
    pub fn to_edge_list_string(&self) -> String {
        let edges = self.edges();
        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.capacity(), edges.len());
        for (u, v) in edges {
            let _ = writeln!(out, "{u} {v}");
        }
        out
    }
}

fn parse_numbers(content: &str, line: usize) -> Result<Vec<usize>> {
    content
        .split_whitespace()
        .map(|tok| {
            tok.parse::<usize>().map_err(|e| DrdError::Parse {
                line,
                message: format!("`{tok}`: {e}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        let g = Graph::parse("4 3\n0 1\n1 2\n2 3\n", false).unwrap();
        assert_eq!(g.order(), 4);
        assert_eq!(g.size(), 6);
        assert!(g.edge_exists(3, 2));
    }

    #[test]
    fn test_parse_several_pairs_per_line() {
        let g = Graph::parse("# comment\n5 4\n\n0 1 1 2\n2 3 3 4\n", false).unwrap();
        assert_eq!(g.edges(), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_parse_directed() {
        let g = Graph::parse("3 2\n0 1\n2 1\n", true).unwrap();
        assert_eq!(g.size(), 2);
        assert!(!g.edge_exists(1, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Graph::parse("", false),
            Err(DrdError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Graph::parse("3\n", false),
            Err(DrdError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Graph::parse("3 1\n0 x\n", false),
            Err(DrdError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            Graph::parse("3 1\n0 1 2\n", false),
            Err(DrdError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            Graph::parse("3 1\n0 7\n", false),
            Err(DrdError::VertexOutOfRange { vertex: 7, .. })
        ));
        assert!(matches!(Graph::parse("0 0\n", false), Err(DrdError::EmptyGraph)));
    }

    #[test]
    fn test_edge_list_roundtrip_preserves_structure() {
        let g = Graph::from_edges(5, false, &[(0, 4), (1, 3), (3, 4)]).unwrap();
        let text = g.to_edge_list_string();
        assert!(text.starts_with("5 3\n"));
        let back = Graph::parse(&text, false).unwrap();
        assert_eq!(back.edges(), g.edges());
        assert_eq!(back.size(), g.size());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Graph::from_path("/nonexistent/graph.txt", false).unwrap_err();
        assert!(matches!(err, DrdError::Io(_)));
    }
}
