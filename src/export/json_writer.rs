use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    errors::ExportError,
    report::{MergeRange, SheetBlock, Workbook},
    utils::fs::write_atomic,
};

use super::WorkbookSerializer;

#[derive(Serialize)]
struct WorkbookDocument<'a> {
    generated_at: DateTime<Utc>,
    sheets: Vec<SheetDocument<'a>>,
}

#[derive(Serialize)]
struct SheetDocument<'a> {
    name: &'a str,
    column_widths: Vec<u16>,
    merges: Vec<MergeRange>,
    blocks: &'a [SheetBlock],
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<Vec<Vec<String>>>,
}

/// Writes the workbook as one pretty-printed JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWorkbookWriter {
    /// Also emit the dense text grid of each sheet.
    pub include_grid: bool,
}

impl WorkbookSerializer for JsonWorkbookWriter {
    fn write(&self, workbook: &Workbook, destination: &Path) -> Result<(), ExportError> {
        if destination.is_dir() {
            return Err(ExportError::Destination(format!(
                "`{}` is a directory",
                destination.display()
            )));
        }
        let document = WorkbookDocument {
            generated_at: Utc::now(),
            sheets: workbook
                .sheets
                .iter()
                .map(|sheet| SheetDocument {
                    name: &sheet.name,
                    column_widths: sheet.column_widths(),
                    merges: sheet.merges(),
                    blocks: &sheet.blocks,
                    grid: self.include_grid.then(|| sheet.grid()),
                })
                .collect(),
        };
        let json = serde_json::to_vec_pretty(&document)?;
        write_atomic(destination, &json)?;
        tracing::info!(path = %destination.display(), sheets = workbook.sheets.len(), "wrote JSON workbook");
        Ok(())
    }
}
