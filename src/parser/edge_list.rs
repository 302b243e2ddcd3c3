//! Native edge-list format.
//!
//! ```text
//! # comments run to the end of the line
//! undirected
//! 1 2
//! 2 3 0.5
//! ```
//!
//! The optional first directive is `directed` (the default) or
//! `undirected`. Each remaining line is `source target [weight]`, with the
//! weight defaulting to 1.

use std::path::Path;

use tracing::{debug, instrument};

use super::{read_file, ParseError, ParseResult};
use crate::graph::Graph;

/// Reads an edge list from `path`.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, or
/// [`ParseError::MalformedEdge`] for the first bad line.
pub fn load_edge_list(path: &Path) -> ParseResult<Graph> {
    let content = read_file(path)?;
    parse_edge_list(&content)
}

/// Parses an edge list from a string.
///
/// # Errors
///
/// Returns [`ParseError::MalformedEdge`] if a line does not have two or
/// three tokens, or if its weight is not a finite number.
///
/// # Example
///
/// ```
/// use graphinfo::parser::parse_edge_list;
///
/// let graph = parse_edge_list("undirected\n1 2\n2 1\n").unwrap();
/// assert!(!graph.is_directed());
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_edge_list(text: &str) -> ParseResult<Graph> {
    let mut graph: Option<Graph> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        if graph.is_none() {
            if line.eq_ignore_ascii_case("directed") {
                graph = Some(Graph::new());
                continue;
            }
            if line.eq_ignore_ascii_case("undirected") {
                graph = Some(Graph::new_undirected());
                continue;
            }
        }
        let graph = graph.get_or_insert_with(Graph::new);

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (source, target, weight) = match tokens.as_slice() {
            [source, target] => (*source, *target, 1.0),
            [source, target, weight] => (*source, *target, parse_weight(weight, line_no)?),
            _ => {
                return Err(ParseError::MalformedEdge {
                    line: line_no,
                    reason: format!("expected 'source target [weight]', found '{}'", line),
                })
            }
        };
        graph.add_labeled_edge(source, target, weight);
    }

    let graph = graph.unwrap_or_default();
    debug!(
        directed = graph.is_directed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

fn parse_weight(token: &str, line: usize) -> ParseResult<f64> {
    match token.parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(ParseError::MalformedEdge {
            line,
            reason: format!("'{}' is not a valid weight", token),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge_list_defaults_to_directed() {
        let graph = parse_edge_list("1 2\n2 3\n").unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parse_edge_list_weights_and_comments() {
        let text = "# sample\ndirected # explicit\n\na b 2.5\nb c # unweighted\n";
        let graph = parse_edge_list(text).unwrap();
        let a = graph.vertex("a").unwrap();
        let b = graph.vertex("b").unwrap();
        let c = graph.vertex("c").unwrap();
        assert_eq!(graph.edge_weight(a, b), Some(2.5));
        assert_eq!(graph.edge_weight(b, c), Some(1.0));
    }

    #[test]
    fn test_parse_edge_list_undirected_merges_reciprocal() {
        let graph = parse_edge_list("UNDIRECTED\n1 2\n2 1\n2 3\n").unwrap();
        assert!(!graph.is_directed());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_directive_only_applies_first() {
        let err = parse_edge_list("1 2\nundirected\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEdge { line: 2, .. }));
    }

    #[test]
    fn test_bad_weight() {
        let err = parse_edge_list("1 2 heavy\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEdge { line: 1, .. }));
    }

    #[test]
    fn test_wrong_token_count() {
        let err = parse_edge_list("1 2 3 4\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEdge { line: 1, .. }));
    }

    #[test]
    fn test_load_edge_list_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a b\nb a\n").unwrap();
        let graph = load_edge_list(file.path()).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_empty_input_is_empty_graph() {
        let graph = parse_edge_list("# nothing here\n").unwrap();
        assert!(graph.is_empty());
    }
}
