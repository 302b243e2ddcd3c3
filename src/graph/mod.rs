//! Graph module for labeled, weighted graphs.
//!
//! This module provides the [`Graph`] container the builder fills and the
//! analyzer reads. Vertices carry a string label (matrix position, 1-based)
//! and are addressed through opaque [`VertexId`] handles.
//!
//! # Example
//!
//! ```rust
//! use graphinfo::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_labeled_edge("1", "2", 1.0);
//! graph.add_labeled_edge("2", "1", 1.0);
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 2);
//!
//! graph.set_directed(false);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod labeled_graph;

pub use labeled_graph::{EdgeView, Graph, Vertex, VertexId};
