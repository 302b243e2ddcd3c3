//! Configuration for graph construction and analysis.
//!
//! Every behaviour that historically differed between versions of the
//! analyzer is an explicit option here rather than a hardcoded choice.
//! The policy enums derive [`clap::ValueEnum`] so the CLI maps flags onto
//! them directly, and `serde` so they can live in a host tool's config file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How matrix cell values become edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPolicy {
    /// The cell value is the edge weight
    #[default]
    Matrix,
    /// Any nonzero cell produces an edge of weight 1
    Presence,
}

/// What to do when the matrix declares zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyMatrixPolicy {
    /// Fail with [`crate::parser::ParseError::EmptyInput`]
    #[default]
    Reject,
    /// Produce a valid graph with no vertices
    EmptyGraph,
}

/// Which edge weights make a graph count as weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeightedPredicate {
    /// Any weight other than 1, including weights below 1
    #[default]
    NonUnit,
    /// Only weights strictly greater than 1
    SuperUnit,
}

impl WeightedPredicate {
    /// Returns true if `weight` marks the graph as weighted.
    pub fn matches(self, weight: f64) -> bool {
        match self {
            Self::NonUnit => weight != 1.0,
            Self::SuperUnit => weight > 1.0,
        }
    }
}

/// Where the analyzer takes directedness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DirectednessPolicy {
    /// Derive it from edge symmetry on every analysis
    #[default]
    Recompute,
    /// Use the flag stored on the graph
    TrustGraph,
}

/// Options for building a graph from an incidence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub weights: WeightPolicy,
    pub empty_matrix: EmptyMatrixPolicy,
}

/// Options for analyzing a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub weighted_predicate: WeightedPredicate,
    pub directedness: DirectednessPolicy,
}
