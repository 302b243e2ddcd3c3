//! Labeled graph implementation using petgraph.
//!
//! Stores every edge physically as a directed petgraph edge. In undirected
//! mode there is at most one physical edge per unordered vertex pair and all
//! neighbourhood queries ignore direction.

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Opaque handle for a vertex, stable for the lifetime of the graph.
pub type VertexId = NodeIndex;

/// A vertex in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Unique label, e.g. `"3"` for the third matrix row
    pub label: String,
}

impl Vertex {
    /// Creates a new vertex with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A borrowed-free view of one stored edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView {
    /// Source vertex (for undirected graphs, the endpoint inserted first)
    pub source: VertexId,
    /// Target vertex
    pub target: VertexId,
    /// Edge weight, 1.0 for unweighted graphs
    pub weight: f64,
}

/// A labeled graph with weighted edges that is either directed or undirected.
///
/// The graph uses petgraph's `DiGraph` internally. Vertices are looked up by
/// label through an index map, so creating a vertex that already exists is a
/// cheap no-op.
///
/// # Example
///
/// ```rust
/// use graphinfo::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.get_or_create_vertex("1");
/// let b = graph.get_or_create_vertex("2");
/// graph.add_edge(a, b, 2.5);
///
/// assert!(graph.has_edge(a, b));
/// assert!(!graph.has_edge(b, a));
/// assert_eq!(graph.edge_weight(a, b), Some(2.5));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// The underlying storage; always directed, direction is interpreted
    graph: DiGraph<Vertex, f64>,
    /// Maps labels to their node indices for O(1) lookup
    vertex_indices: HashMap<String, NodeIndex>,
    directed: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a new empty directed graph.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a new empty undirected graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphinfo::graph::Graph;
    ///
    /// let mut graph = Graph::new_undirected();
    /// graph.add_labeled_edge("1", "2", 1.0);
    /// graph.add_labeled_edge("2", "1", 1.0);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn new_undirected() -> Self {
        let mut graph = Self::new();
        graph.directed = false;
        graph
    }

    /// Creates a new directed graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertices` - Expected number of vertices
    /// * `edges` - Expected number of edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(vertices, edges),
            vertex_indices: HashMap::with_capacity(vertices),
            directed: true,
        }
    }

    /// Returns true if edges are interpreted as ordered pairs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Switches the graph between directed and undirected interpretation.
    ///
    /// Switching to undirected collapses reciprocal edges `(u, v)` and
    /// `(v, u)` into a single edge. The edge inserted first is kept together
    /// with its weight.
    pub fn set_directed(&mut self, directed: bool) {
        if self.directed == directed {
            return;
        }
        self.directed = directed;
        if directed {
            return;
        }

        let stored: Vec<EdgeView> = self.edges().collect();
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::with_capacity(stored.len());
        self.graph.clear_edges();

        for edge in stored {
            if seen.insert(unordered(edge.source, edge.target)) {
                self.graph.add_edge(edge.source, edge.target, edge.weight);
            }
        }
    }

    /// Returns the vertex with the given label, creating it if needed.
    pub fn get_or_create_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&idx) = self.vertex_indices.get(label) {
            return idx;
        }

        let idx = self.graph.add_node(Vertex::new(label));
        self.vertex_indices.insert(label.to_string(), idx);
        idx
    }

    /// Looks up a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<VertexId> {
        self.vertex_indices.get(label).copied()
    }

    /// Returns the label of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn label(&self, id: VertexId) -> &str {
        &self.graph[id].label
    }

    /// Adds an edge from `source` to `target`.
    ///
    /// If the edge already exists (in either direction for undirected
    /// graphs) its weight is replaced and the existing index is returned.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) -> EdgeIndex {
        if let Some(idx) = self.find_edge(source, target) {
            self.graph[idx] = weight;
            return idx;
        }
        self.graph.add_edge(source, target, weight)
    }

    /// Adds an edge between two labels, creating the vertices on demand.
    pub fn add_labeled_edge(&mut self, source: &str, target: &str, weight: f64) -> EdgeIndex {
        let s = self.get_or_create_vertex(source);
        let t = self.get_or_create_vertex(target);
        self.add_edge(s, t, weight)
    }

    /// Returns true if an edge joins `source` to `target`.
    pub fn has_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Returns the weight of the edge from `source` to `target`, if any.
    pub fn edge_weight(&self, source: VertexId, target: VertexId) -> Option<f64> {
        self.find_edge(source, target).map(|idx| self.graph[idx])
    }

    fn find_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeIndex> {
        if self.directed {
            self.graph.find_edge(source, target)
        } else {
            self.graph
                .find_edge_undirected(source, target)
                .map(|(idx, _)| idx)
        }
    }

    /// Iterates over all vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.node_indices()
    }

    /// Iterates over all stored edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.graph.edge_references().map(|edge| EdgeView {
            source: edge.source(),
            target: edge.target(),
            weight: *edge.weight(),
        })
    }

    /// Returns true if every edge `(u, v)` has an edge `(v, u)` of equal
    /// weight. Undirected graphs are always symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.edges()
            .all(|edge| self.edge_weight(edge.target, edge.source) == Some(edge.weight))
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Vertices reachable over one outgoing edge.
    ///
    /// For undirected graphs this is the whole neighbourhood.
    pub fn out_neighbours(&self, v: VertexId) -> Vec<VertexId> {
        if self.directed {
            distinct(self.graph.neighbors_directed(v, Direction::Outgoing))
        } else {
            self.neighbours(v)
        }
    }

    /// Vertices with an edge pointing at `v`.
    ///
    /// For undirected graphs this is the whole neighbourhood.
    pub fn in_neighbours(&self, v: VertexId) -> Vec<VertexId> {
        if self.directed {
            distinct(self.graph.neighbors_directed(v, Direction::Incoming))
        } else {
            self.neighbours(v)
        }
    }

    /// All adjacent vertices regardless of edge direction.
    pub fn neighbours(&self, v: VertexId) -> Vec<VertexId> {
        distinct(self.graph.neighbors_undirected(v))
    }

    /// Number of stored edges touching `v`; a self-loop counts twice.
    pub fn incident_edge_count(&self, v: VertexId) -> usize {
        self.graph.edges_directed(v, Direction::Outgoing).count()
            + self.graph.edges_directed(v, Direction::Incoming).count()
    }
}

fn unordered(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn distinct(iter: impl Iterator<Item = VertexId>) -> Vec<VertexId> {
    iter.collect::<BTreeSet<_>>().into_iter().collect()
}
