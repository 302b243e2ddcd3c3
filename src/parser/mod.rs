//! Parser module for graphinfo.
//!
//! This module turns text on disk into a [`Graph`](crate::graph::Graph).
//!
//! # Supported Formats
//!
//! - **Incidence matrix** - comma-separated square numeric matrix, the
//!   primary format. Directedness and weights are inferred.
//! - **Edge list** - the native fallback format, one `source target [weight]`
//!   triple per line with an optional `directed`/`undirected` directive.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use graphinfo::config::BuilderConfig;
//! use graphinfo::parser::load_graph;
//!
//! let loaded = load_graph(Path::new("graph.csv"), &BuilderConfig::default())?;
//! println!("loaded {} vertices from {}", loaded.graph.vertex_count(), loaded.source);
//! ```

pub mod edge_list;
pub mod matrix;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{instrument, warn};

use crate::config::BuilderConfig;
use crate::graph::Graph;

pub use edge_list::{load_edge_list, parse_edge_list};
pub use matrix::{GraphBuilder, IncidenceMatrix};

/// Errors that can occur while reading a graph.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matrix row has the wrong number of tokens or a non-numeric token.
    #[error("Malformed matrix row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// Fewer rows than the first line declares.
    #[error("Matrix declares {declared} rows but only {found} are present")]
    EmptyInput { declared: usize, found: usize },

    /// An edge-list line could not be parsed.
    #[error("Malformed edge list line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Which loader produced a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSource {
    Matrix,
    EdgeList,
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix => write!(f, "incidence matrix"),
            Self::EdgeList => write!(f, "edge list"),
        }
    }
}

/// A graph together with the loader that produced it.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub source: GraphSource,
}

/// Reads a file into memory, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> ParseResult<String> {
    fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a graph from `path`, trying the incidence matrix format first.
///
/// When the matrix parse fails the failure is logged and the same text is
/// parsed as an edge list. I/O errors are returned without a retry, and so
/// is the result for blank input, which the empty-matrix policy decides. If
/// both formats fail, the edge-list error is returned.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise the
/// error from the edge-list loader when neither format applies.
#[instrument(skip(config))]
pub fn load_graph(path: &Path, config: &BuilderConfig) -> ParseResult<LoadedGraph> {
    let content = read_file(path)?;

    let matrix_error = match GraphBuilder::new(*config).build_from_text(&content) {
        Ok(graph) => {
            return Ok(LoadedGraph {
                graph,
                source: GraphSource::Matrix,
            })
        }
        Err(err) => err,
    };
    if content.trim().is_empty() {
        // empty input is governed by the empty-matrix policy alone
        return Err(matrix_error);
    }
    warn!(error = %matrix_error, "not an incidence matrix, falling back to edge list");

    match parse_edge_list(&content) {
        Ok(graph) => Ok(LoadedGraph {
            graph,
            source: GraphSource::EdgeList,
        }),
        Err(err) => {
            warn!(error = %err, "edge list fallback failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyMatrixPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_graph_matrix() {
        let file = write_temp("0,1\n1,0\n");
        let loaded = load_graph(file.path(), &BuilderConfig::default()).unwrap();
        assert_eq!(loaded.source, GraphSource::Matrix);
        assert_eq!(loaded.graph.vertex_count(), 2);
        assert!(!loaded.graph.is_directed());
    }

    #[test]
    fn test_load_graph_falls_back_to_edge_list() {
        let file = write_temp("directed\n1 2\n2 3 4.5\n");
        let loaded = load_graph(file.path(), &BuilderConfig::default()).unwrap();
        assert_eq!(loaded.source, GraphSource::EdgeList);
        assert_eq!(loaded.graph.vertex_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 2);
    }

    #[test]
    fn test_load_graph_empty_file_rejected_by_default() {
        let file = write_temp("");
        let err = load_graph(file.path(), &BuilderConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptyInput {
                declared: 0,
                found: 0
            }
        ));
    }

    #[test]
    fn test_load_graph_empty_file_allowed_by_policy() {
        let file = write_temp("\n");
        let config = BuilderConfig {
            empty_matrix: EmptyMatrixPolicy::EmptyGraph,
            ..BuilderConfig::default()
        };
        let loaded = load_graph(file.path(), &config).unwrap();
        assert_eq!(loaded.source, GraphSource::Matrix);
        assert!(loaded.graph.is_empty());
    }

    #[test]
    fn test_load_graph_missing_file() {
        let err = load_graph(Path::new("/nonexistent/graph.csv"), &BuilderConfig::default())
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_load_graph_both_formats_fail() {
        let file = write_temp("1,2,3\n1,x,3\n");
        let err = load_graph(file.path(), &BuilderConfig::default()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedEdge { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::EmptyInput {
            declared: 3,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Matrix declares 3 rows but only 1 are present"
        );
        assert_eq!(GraphSource::EdgeList.to_string(), "edge list");
    }
}
