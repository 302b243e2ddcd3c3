//! JSON export implementation.
//!
//! Exports analysis reports in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::analysis::AnalysisReport;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    source: &'a str,
    loader: &'a str,
    #[serde(flatten)]
    report: &'a AnalysisReport,
    edge_listing: String,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            source: &data.source,
            loader: &data.loader,
            report: &data.report,
            edge_listing: data.report.edge_listing(),
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
