//! Markdown export implementation.
//!
//! Exports analysis reports in Markdown format for documentation and reporting.

use super::{ExportData, Exporter};
use crate::analysis::yes_no;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let report = &data.report;

        // Title
        writeln!(writer, "# Graph Analysis Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Source:** {} ({})", data.source, data.loader)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Properties")?;
        writeln!(writer)?;
        writeln!(writer, "| Property | Value |")?;
        writeln!(writer, "|----------|-------|")?;
        writeln!(writer, "| Directed | {} |", yes_no(report.directed))?;
        writeln!(writer, "| Weighted | {} |", yes_no(report.weighted))?;
        writeln!(writer, "| Connected | {} |", yes_no(report.connected))?;
        writeln!(writer, "| Vertices | {} |", report.vertex_count)?;
        writeln!(writer, "| Edges | {} |", report.edge_count)?;
        writeln!(writer, "| Minimum degree | {} |", report.min_degree)?;
        writeln!(writer, "| Maximum degree | {} |", report.max_degree)?;
        writeln!(writer, "| Regular | {} |", yes_no(report.regular))?;
        writeln!(writer, "| Bipartite | {} |", yes_no(report.bipartite))?;
        writeln!(writer)?;

        // Edges
        writeln!(writer, "## Edges ({})", report.edges.len())?;
        writeln!(writer)?;
        if report.edges.is_empty() {
            writeln!(writer, "_No edges._")?;
            return Ok(());
        }

        writeln!(writer, "| Source | Target | Weight |")?;
        writeln!(writer, "|--------|--------|--------|")?;
        for edge in &report.edges {
            writeln!(writer, "| {} | {} | {} |", edge.source, edge.target, edge.weight)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_data;

    #[test]
    fn test_markdown_export_basic() {
        let mut output = Vec::new();
        MarkdownExporter.export(&sample_data(), &mut output).unwrap();
        let md_str = String::from_utf8(output).unwrap();

        assert!(md_str.contains("# Graph Analysis Report"));
        assert!(md_str.contains("**Source:** triangle.csv (incidence matrix)"));
        assert!(md_str.contains("| Directed | no |"));
        assert!(md_str.contains("| Maximum degree | 2 |"));
        assert!(md_str.contains("## Edges (2)"));
        assert!(md_str.contains("| 1 | 2 | 2.5 |"));
    }

    #[test]
    fn test_markdown_export_no_edges() {
        let mut data = sample_data();
        data.report.edges.clear();
        data.report.edge_count = 0;

        let mut output = Vec::new();
        MarkdownExporter.export(&data, &mut output).unwrap();
        let md_str = String::from_utf8(output).unwrap();

        assert!(md_str.contains("## Edges (0)"));
        assert!(md_str.contains("_No edges._"));
        assert!(!md_str.contains("| Source | Target | Weight |"));
    }
}
