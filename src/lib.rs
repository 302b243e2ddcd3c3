//! graphinfo - structural property analyzer for graphs
//!
//! This crate builds graphs from comma-separated incidence matrices (or a
//! plain edge list) and reports directedness, weightedness, connectivity,
//! degree range, regularity and bipartiteness.

pub mod analysis;
pub mod config;
pub mod export;
pub mod graph;
pub mod parser;
