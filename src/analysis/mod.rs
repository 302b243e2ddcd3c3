//! Structural analysis module for graphinfo.
//!
//! This module computes a fixed battery of properties over an existing
//! [`Graph`](crate::graph::Graph):
//!
//! - Directedness (from edge symmetry, or trusted from the graph)
//! - Weightedness, under a configurable predicate
//! - Connectivity (strong connectivity for directed graphs)
//! - Minimum and maximum vertex degree
//! - Regularity
//! - Bipartiteness (direction-agnostic two-colouring)
//!
//! # Example
//!
//! ```rust
//! use graphinfo::analysis::GraphAnalyzer;
//! use graphinfo::config::BuilderConfig;
//! use graphinfo::parser::GraphBuilder;
//!
//! let graph = GraphBuilder::new(BuilderConfig::default())
//!     .build_from_text("0,1,1\n1,0,1\n1,1,0\n")
//!     .unwrap();
//! let report = GraphAnalyzer::new(&graph).report();
//!
//! assert!(!report.directed);
//! assert!(report.regular);
//! assert!(!report.bipartite);
//! ```

pub mod analyzer;
pub mod report;

pub use analyzer::GraphAnalyzer;
pub use report::{yes_no, AnalysisReport, EdgeEntry};
