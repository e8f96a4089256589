//! Workbook serializer boundary.
//!
//! Serializers receive fully formatted sheets and only encode them. Output is
//! staged and moved into place on success; a failure never leaves a partial
//! file at the destination.

pub mod csv_writer;
pub mod json_writer;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{errors::ExportError, report::Workbook};

pub use csv_writer::CsvWorkbookWriter;
pub use json_writer::JsonWorkbookWriter;

pub trait WorkbookSerializer {
    /// Encodes `workbook` at `destination`, replacing anything already there.
    fn write(&self, workbook: &Workbook, destination: &Path) -> Result<(), ExportError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One JSON document describing every sheet.
    #[default]
    Json,
    /// A directory holding one CSV file per sheet.
    Csv,
}

impl ExportFormat {
    pub fn serializer(self) -> Box<dyn WorkbookSerializer> {
        match self {
            ExportFormat::Json => Box::new(JsonWorkbookWriter::default()),
            ExportFormat::Csv => Box::new(CsvWorkbookWriter),
        }
    }
}

/// File-system friendly form of a sheet name: lowercase ASCII words joined by `-`.
pub(crate) fn slug(name: &str) -> String {
    let mut out = String::new();
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slugs_sheet_names() {
        assert_eq!(slug("Laporan Keuangan"), "laporan-keuangan");
        assert_eq!(slug("  Laba / Rugi "), "laba-rugi");
    }
}
