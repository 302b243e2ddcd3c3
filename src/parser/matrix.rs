//! Incidence matrix parsing and graph construction.
//!
//! The matrix size `N` is the number of comma-separated tokens on the first
//! line. The first `N` lines (including the first) are the rows; anything
//! after them is ignored. A nonzero cell `(i, j)` becomes an edge from vertex
//! `i + 1` to vertex `j + 1`.

use std::path::Path;

use tracing::{debug, instrument};

use super::{read_file, ParseError, ParseResult};
use crate::config::{BuilderConfig, EmptyMatrixPolicy, WeightPolicy};
use crate::graph::Graph;

/// A square numeric matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl IncidenceMatrix {
    /// Creates a matrix of the given size filled with zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedRow`] if any row length differs from
    /// the number of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use graphinfo::parser::IncidenceMatrix;
    ///
    /// let matrix = IncidenceMatrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
    /// assert_eq!(matrix.size(), 2);
    /// assert!(matrix.is_symmetric());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> ParseResult<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ParseError::MalformedRow {
                    row: i + 1,
                    reason: format!("expected {} values, found {}", size, row.len()),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the value at row `i`, column `j` (both 0-based).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "matrix index out of bounds");
        self.cells[i * self.size + j]
    }

    /// Returns true if `m[i][j] == m[j][i]` for every cell.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Builds graphs from incidence matrix text.
///
/// # Example
///
/// ```
/// use graphinfo::config::BuilderConfig;
/// use graphinfo::parser::GraphBuilder;
///
/// let builder = GraphBuilder::new(BuilderConfig::default());
/// let graph = builder.build_from_text("0,1\n0,0\n").unwrap();
/// assert!(graph.is_directed());
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    config: BuilderConfig,
}

impl GraphBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Reads `path` and builds a graph from its matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read, or any error
    /// from [`GraphBuilder::build_from_text`].
    pub fn build_from_file(&self, path: &Path) -> ParseResult<Graph> {
        let content = read_file(path)?;
        self.build_from_text(&content)
    }

    /// Parses matrix text and builds a graph from it.
    ///
    /// # Errors
    ///
    /// See [`GraphBuilder::parse_matrix`].
    pub fn build_from_text(&self, text: &str) -> ParseResult<Graph> {
        let matrix = self.parse_matrix(text)?;
        Ok(self.build_graph(&matrix))
    }

    /// Parses an `N x N` comma-separated matrix.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyInput`] if fewer than `N` lines are present, or
    ///   if `N` is zero and the builder rejects empty matrices.
    /// - [`ParseError::MalformedRow`] if a row does not have exactly `N`
    ///   finite numeric tokens.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn parse_matrix(&self, text: &str) -> ParseResult<IncidenceMatrix> {
        let size = declared_size(text);
        if size == 0 {
            return match self.config.empty_matrix {
                EmptyMatrixPolicy::EmptyGraph => Ok(IncidenceMatrix::zeros(0)),
                EmptyMatrixPolicy::Reject => Err(ParseError::EmptyInput {
                    declared: 0,
                    found: 0,
                }),
            };
        }

        // the first line alone can declare a size far beyond the input
        let found = text.lines().take(size).count();
        if found < size {
            return Err(ParseError::EmptyInput {
                declared: size,
                found,
            });
        }

        let mut cells = Vec::new();
        for (i, line) in text.lines().take(size).enumerate() {
            parse_row(line, i + 1, size, &mut cells)?;
        }

        debug!(size, "parsed incidence matrix");
        Ok(IncidenceMatrix { size, cells })
    }

    /// Materializes a graph from a matrix.
    ///
    /// Vertices are labeled with their 1-based row index and exist only if
    /// they take part in at least one edge. The graph is made undirected
    /// when every edge has a reciprocal edge of equal weight.
    #[instrument(skip_all, fields(size = matrix.size()))]
    pub fn build_graph(&self, matrix: &IncidenceMatrix) -> Graph {
        let mut graph = Graph::new();

        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                let value = matrix.get(i, j);
                if value == 0.0 {
                    continue;
                }
                let weight = match self.config.weights {
                    WeightPolicy::Matrix => value,
                    WeightPolicy::Presence => 1.0,
                };
                let source = graph.get_or_create_vertex(&(i + 1).to_string());
                let target = graph.get_or_create_vertex(&(j + 1).to_string());
                graph.add_edge(source, target, weight);
            }
        }

        let directed = !graph.is_symmetric();
        graph.set_directed(directed);

        debug!(
            directed,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built graph from matrix"
        );
        graph
    }
}

fn declared_size(text: &str) -> usize {
    match text.lines().next() {
        Some(line) if !line.trim().is_empty() => line.split(',').count(),
        _ => 0,
    }
}

fn parse_row(line: &str, row: usize, size: usize, cells: &mut Vec<f64>) -> ParseResult<()> {
    let tokens: Vec<&str> = line.split(',').collect();
    if tokens.len() != size {
        return Err(ParseError::MalformedRow {
            row,
            reason: format!("expected {} values, found {}", size, tokens.len()),
        });
    }

    cells.reserve(size);
    for token in tokens {
        let token = token.trim();
        let value: f64 = token.parse().map_err(|_| ParseError::MalformedRow {
            row,
            reason: format!("'{}' is not a number", token),
        })?;
        if !value.is_finite() {
            return Err(ParseError::MalformedRow {
                row,
                reason: format!("'{}' is not a finite number", token),
            });
        }
        cells.push(value);
    }
    Ok(())
}
