//! Structural property computation.
//!
//! [`GraphAnalyzer`] borrows a graph for its whole lifetime, so the graph
//! cannot change underneath it. Directedness is resolved once at
//! construction and every other property uses that same flag.

use std::collections::HashSet;

use tracing::{debug, instrument};

use super::report::{AnalysisReport, EdgeEntry};
use crate::config::{AnalyzerConfig, DirectednessPolicy};
use crate::graph::{EdgeView, Graph, VertexId};

/// Computes directedness, weights, connectivity, degrees, regularity and
/// bipartiteness of a graph.
///
/// # Example
///
/// ```rust
/// use graphinfo::analysis::GraphAnalyzer;
/// use graphinfo::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_labeled_edge("1", "2", 1.0);
///
/// let analyzer = GraphAnalyzer::new(&graph);
/// assert!(analyzer.directed());
/// assert!(!analyzer.connected());
/// assert!(analyzer.bipartite());
/// ```
#[derive(Debug, Clone)]
pub struct GraphAnalyzer<'g> {
    graph: &'g Graph,
    config: AnalyzerConfig,
    directed: bool,
    /// Edges as analyzed; reciprocal pairs collapsed when undirected
    edges: Vec<EdgeView>,
}

impl<'g> GraphAnalyzer<'g> {
    /// Creates an analyzer with the default configuration.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, AnalyzerConfig::default())
    }

    /// Creates an analyzer with an explicit configuration.
    pub fn with_config(graph: &'g Graph, config: AnalyzerConfig) -> Self {
        let directed = match config.directedness {
            DirectednessPolicy::Recompute => !graph.is_symmetric(),
            DirectednessPolicy::TrustGraph => graph.is_directed(),
        };
        debug!(directed, policy = ?config.directedness, "resolved directedness");

        let edges = if directed {
            graph.edges().collect()
        } else {
            collapse_reciprocal(graph)
        };

        Self {
            graph,
            config,
            directed,
            edges,
        }
    }

    /// Returns the graph being analyzed.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns true if the graph is treated as directed.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Returns true if any edge weight satisfies the configured predicate.
    pub fn weighted(&self) -> bool {
        let predicate = self.config.weighted_predicate;
        self.edges.iter().any(|edge| predicate.matches(edge.weight))
    }

    /// Returns the edges as analyzed.
    pub fn edges(&self) -> &[EdgeView] {
        &self.edges
    }

    /// Tests connectivity; for directed graphs, strong connectivity.
    ///
    /// Runs a depth-first search over outgoing edges from every vertex and
    /// stops at the first start vertex that cannot reach all others. An
    /// empty graph is connected.
    pub fn connected(&self) -> bool {
        let starts: Vec<VertexId> = if self.directed {
            self.graph.vertices().collect()
        } else {
            // one search decides connectivity without direction
            self.graph.vertices().take(1).collect()
        };

        for start in starts {
            let mut visited = vec![false; self.graph.vertex_count()];
            visited[start.index()] = true;
            let mut stack = vec![start];

            while let Some(v) = stack.pop() {
                for next in self.successors(v) {
                    if !visited[next.index()] {
                        visited[next.index()] = true;
                        stack.push(next);
                    }
                }
            }

            if visited.contains(&false) {
                debug!(start = self.graph.label(start), "found unreachable vertex");
                return false;
            }
        }
        true
    }

    /// Degree of `v`: incident edges when directed, distinct neighbours
    /// otherwise.
    pub fn degree(&self, v: VertexId) -> usize {
        if self.directed {
            self.graph.incident_edge_count(v)
        } else {
            self.graph.neighbours(v).len()
        }
    }

    /// Number of distinct vertices with an edge into `v`.
    pub fn in_degree(&self, v: VertexId) -> usize {
        if self.directed {
            self.graph.in_neighbours(v).len()
        } else {
            self.degree(v)
        }
    }

    /// Number of distinct vertices `v` has an edge to.
    pub fn out_degree(&self, v: VertexId) -> usize {
        if self.directed {
            self.graph.out_neighbours(v).len()
        } else {
            self.degree(v)
        }
    }

    /// Smallest vertex degree, 0 for an empty graph.
    pub fn min_degree(&self) -> usize {
        self.graph
            .vertices()
            .map(|v| self.degree(v))
            .min()
            .unwrap_or(0)
    }

    /// Largest vertex degree, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.graph
            .vertices()
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Tests regularity.
    ///
    /// All degrees must be equal. Directed graphs additionally need every
    /// vertex's in-degree to equal its own out-degree.
    pub fn regular(&self) -> bool {
        self.regular_with(self.min_degree(), self.max_degree())
    }

    fn regular_with(&self, min_degree: usize, max_degree: usize) -> bool {
        if min_degree != max_degree {
            return false;
        }
        !self.directed
            || self
                .graph
                .vertices()
                .all(|v| self.in_degree(v) == self.out_degree(v))
    }

    /// Tests bipartiteness by two-colouring every component, ignoring edge
    /// direction.
    ///
    /// A self-loop makes a graph non-bipartite. An empty graph is bipartite.
    pub fn bipartite(&self) -> bool {
        let mut colors: Vec<Option<u8>> = vec![None; self.graph.vertex_count()];
        let mut stack = Vec::new();

        for start in self.graph.vertices() {
            if colors[start.index()].is_some() {
                continue;
            }
            colors[start.index()] = Some(0);
            stack.push(start);

            while let Some(v) = stack.pop() {
                let target = match colors[v.index()] {
                    Some(0) => 1,
                    _ => 0,
                };
                for next in self.graph.neighbours(v) {
                    match colors[next.index()] {
                        None => {
                            colors[next.index()] = Some(target);
                            stack.push(next);
                        }
                        Some(color) if color != target => {
                            debug!(
                                from = self.graph.label(v),
                                to = self.graph.label(next),
                                "edge joins vertices of the same colour"
                            );
                            return false;
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }

    /// Renders the analyzed edges as `"source<sep>target: weight"` joined
    /// by `", "`, with `->` for directed graphs and `-` otherwise.
    pub fn edge_listing(&self) -> String {
        self.edge_entries()
            .iter()
            .map(|entry| entry.render(self.directed))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Computes every property into an immutable report.
    #[instrument(skip_all, fields(vertices = self.graph.vertex_count(), edges = self.edges.len()))]
    pub fn report(&self) -> AnalysisReport {
        let min_degree = self.min_degree();
        let max_degree = self.max_degree();

        let report = AnalysisReport {
            directed: self.directed,
            weighted: self.weighted(),
            connected: self.connected(),
            vertex_count: self.graph.vertex_count(),
            edge_count: self.edges.len(),
            edges: self.edge_entries(),
            min_degree,
            max_degree,
            regular: self.regular_with(min_degree, max_degree),
            bipartite: self.bipartite(),
        };
        debug!(?report, "analysis complete");
        report
    }

    fn edge_entries(&self) -> Vec<EdgeEntry> {
        self.edges
            .iter()
            .map(|edge| EdgeEntry {
                source: self.graph.label(edge.source).to_string(),
                target: self.graph.label(edge.target).to_string(),
                weight: edge.weight,
            })
            .collect()
    }

    fn successors(&self, v: VertexId) -> Vec<VertexId> {
        if self.directed {
            self.graph.out_neighbours(v)
        } else {
            self.graph.neighbours(v)
        }
    }
}

fn collapse_reciprocal(graph: &Graph) -> Vec<EdgeView> {
    let mut seen = HashSet::with_capacity(graph.edge_count());
    graph
        .edges()
        .filter(|edge| {
            let key = if edge.source <= edge.target {
                (edge.source, edge.target)
            } else {
                (edge.target, edge.source)
            };
            seen.insert(key)
        })
        .collect()
}
