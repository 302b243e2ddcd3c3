//! Export functionality for analysis reports.
//!
//! This module provides exporters for outputting an [`AnalysisReport`] in
//! various formats: plain text, JSON, and Markdown.

pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::AnalysisReport;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain text - the fixed field-per-line diagnostic layout
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Where the graph came from, usually a file name
    pub source: String,
    /// How the graph was read, e.g. "incidence matrix"
    pub loader: String,
    pub report: AnalysisReport,
}

impl ExportData {
    /// Create new export data for a report.
    pub fn new(
        source: impl Into<String>,
        loader: impl Into<String>,
        report: AnalysisReport,
    ) -> Self {
        Self {
            source: source.into(),
            loader: loader.into(),
            report,
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ReportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextExporter.export(data, writer),
        ReportFormat::Json => json::JsonExporter.export(data, writer),
        ReportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ReportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
pub(crate) fn sample_data() -> ExportData {
    use crate::analysis::EdgeEntry;

    ExportData::new(
        "triangle.csv",
        "incidence matrix",
        AnalysisReport {
            directed: false,
            weighted: true,
            connected: true,
            vertex_count: 3,
            edge_count: 2,
            edges: vec![
                EdgeEntry {
                    source: "1".to_string(),
                    target: "2".to_string(),
                    weight: 2.5,
                },
                EdgeEntry {
                    source: "2".to_string(),
                    target: "3".to_string(),
                    weight: 1.0,
                },
            ],
            min_degree: 1,
            max_degree: 2,
            regular: false,
            bipartite: true,
        },
    )
}
