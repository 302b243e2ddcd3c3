//! Analysis report snapshot.

use serde::Serialize;
use std::fmt;

/// One edge as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEntry {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl EdgeEntry {
    /// Renders the edge as `source->target: weight` (or `source-target` when
    /// undirected).
    pub fn render(&self, directed: bool) -> String {
        let separator = if directed { "->" } else { "-" };
        format!("{}{}{}: {}", self.source, separator, self.target, self.weight)
    }
}

/// Structural properties of a graph at the moment it was analyzed.
///
/// The report owns all of its data and does not follow later changes to
/// the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub directed: bool,
    pub weighted: bool,
    /// Strong connectivity for directed graphs
    pub connected: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub edges: Vec<EdgeEntry>,
    pub min_degree: usize,
    pub max_degree: usize,
    pub regular: bool,
    pub bipartite: bool,
}

impl AnalysisReport {
    /// Edges rendered and joined by `", "`.
    pub fn edge_listing(&self) -> String {
        self.edges
            .iter()
            .map(|edge| edge.render(self.directed))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Renders a boolean the way the text report does.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Directed: {}", yes_no(self.directed))?;
        writeln!(f, "Weighted: {}", yes_no(self.weighted))?;
        writeln!(f, "Connected: {}", yes_no(self.connected))?;
        writeln!(f, "Vertex count: {}", self.vertex_count)?;
        writeln!(f, "Edge count: {}", self.edge_count)?;
        writeln!(f, "Edge list:")?;
        writeln!(f, "{}", self.edge_listing())?;
        writeln!(f, "Minimum vertex degree: {}", self.min_degree)?;
        writeln!(f, "Maximum vertex degree: {}", self.max_degree)?;
        writeln!(f, "Regular: {}", yes_no(self.regular))?;
        write!(f, "Bipartite: {}", yes_no(self.bipartite))
    }
}
