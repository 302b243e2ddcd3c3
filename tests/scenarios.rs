//! End-to-end scenarios: matrix files on disk through to rendered reports.
//!
//! Each test writes a fixture with `tempfile`, loads it the way the CLI
//! does, and checks the resulting report.

use std::io::Write;

use tempfile::NamedTempFile;

use graphinfo::analysis::{AnalysisReport, GraphAnalyzer};
use graphinfo::config::{AnalyzerConfig, BuilderConfig, WeightPolicy, WeightedPredicate};
use graphinfo::export::{export_to_string, ExportData, ReportFormat};
use graphinfo::parser::{load_graph, GraphBuilder, GraphSource, ParseError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn analyze_file(content: &str) -> AnalysisReport {
    let file = fixture(content);
    let loaded = load_graph(file.path(), &BuilderConfig::default()).unwrap();
    GraphAnalyzer::new(&loaded.graph).report()
}

// ---------------------------------------------------------------------------
// Matrix scenarios
// ---------------------------------------------------------------------------

#[test]
fn two_vertex_symmetric_matrix() {
    let report = analyze_file("0,1\n1,0\n");

    assert!(!report.directed);
    assert!(!report.weighted);
    assert!(report.connected);
    assert_eq!(report.vertex_count, 2);
    assert_eq!(report.edge_count, 1);
    assert_eq!(report.min_degree, 1);
    assert_eq!(report.max_degree, 1);
    assert!(report.regular);
    assert!(report.bipartite);
    assert_eq!(report.edge_listing(), "1-2: 1");
}

#[test]
fn single_directed_edge() {
    let report = analyze_file("0,1\n0,0\n");

    assert!(report.directed);
    assert_eq!(report.edge_listing(), "1->2: 1");
    assert!(!report.connected);
    assert!(report.bipartite);
    assert!(!report.regular);
}

#[test]
fn triangle_is_regular_but_not_bipartite() {
    let report = analyze_file("0,1,1\n1,0,1\n1,1,0\n");

    assert!(!report.directed);
    assert_eq!(report.vertex_count, 3);
    assert_eq!(report.edge_count, 3);
    assert_eq!(report.min_degree, 2);
    assert_eq!(report.max_degree, 2);
    assert!(report.regular);
    assert!(!report.bipartite);
    assert!(report.connected);
}

#[test]
fn directed_four_cycle() {
    let report = analyze_file("0,1,0,0\n0,0,1,0\n0,0,0,1\n1,0,0,0\n");

    assert!(report.directed);
    assert!(report.connected);
    assert!(report.regular);
    assert!(report.bipartite);
    assert_eq!(report.edge_count, 4);
}

#[test]
fn weighted_matrix_respects_predicate() {
    let file = fixture("0,0.5\n0.5,0\n");
    let loaded = load_graph(file.path(), &BuilderConfig::default()).unwrap();

    assert!(GraphAnalyzer::new(&loaded.graph).report().weighted);

    let config = AnalyzerConfig {
        weighted_predicate: WeightedPredicate::SuperUnit,
        ..AnalyzerConfig::default()
    };
    assert!(!GraphAnalyzer::with_config(&loaded.graph, config).report().weighted);
}

#[test]
fn presence_policy_flattens_weights() {
    let file = fixture("0,4\n7,0\n");
    let config = BuilderConfig {
        weights: WeightPolicy::Presence,
        ..BuilderConfig::default()
    };
    let loaded = load_graph(file.path(), &config).unwrap();
    let report = GraphAnalyzer::new(&loaded.graph).report();

    assert!(!report.directed);
    assert!(!report.weighted);
    assert_eq!(report.edge_count, 1);
}

// ---------------------------------------------------------------------------
// Failure and fallback
// ---------------------------------------------------------------------------

#[test]
fn short_row_is_malformed_and_builds_nothing() {
    let result = GraphBuilder::default().build_from_text("0,1,0,1\n1,0,1\n0,1,0,1\n1,0,1,0\n");
    assert!(matches!(result, Err(ParseError::MalformedRow { row: 2, .. })));
}

#[test]
fn builder_reports_missing_file() {
    let result = GraphBuilder::default().build_from_file(std::path::Path::new("/no/such/file"));
    assert!(matches!(result, Err(ParseError::Io { .. })));
}

#[test]
fn edge_list_fallback_loads_undirected_square() {
    let file = fixture("undirected\n1 2\n2 3\n3 4\n4 1\n");
    let loaded = load_graph(file.path(), &BuilderConfig::default()).unwrap();
    assert_eq!(loaded.source, GraphSource::EdgeList);

    let report = GraphAnalyzer::new(&loaded.graph).report();
    assert!(!report.directed);
    assert!(report.connected);
    assert!(report.regular);
    assert!(report.bipartite);
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn rendered_reports_carry_the_same_facts() {
    let report = analyze_file("0,1\n0,0\n");
    let data = ExportData::new("fixture.csv", "incidence matrix", report);

    let text = export_to_string(ReportFormat::Text, &data).unwrap();
    assert!(text.contains("Directed: yes"));
    assert!(text.contains("1->2: 1"));

    let json: serde_json::Value =
        serde_json::from_str(&export_to_string(ReportFormat::Json, &data).unwrap()).unwrap();
    assert_eq!(json["directed"], true);
    assert_eq!(json["connected"], false);
    assert_eq!(json["edge_listing"], "1->2: 1");

    let md = export_to_string(ReportFormat::Markdown, &data).unwrap();
    assert!(md.contains("| Connected | no |"));
}
