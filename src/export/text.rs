//! Plain text export implementation.

use super::{ExportData, Exporter};
use std::io::{self, Write};

/// Text exporter: one property per line, in the fixed report order.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", data.report)
    }
}
