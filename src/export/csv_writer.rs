use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::ExportError, report::Workbook};

use super::{slug, WorkbookSerializer};

/// Written into every export directory; only directories carrying it are ever replaced.
const MARKER_FILE: &str = ".buku-export";

/// Writes one CSV file per sheet into a directory, named `NN-sheet-name.csv`.
///
/// The destination must be absent, empty, or a directory produced by an
/// earlier export. Anything else is refused untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWorkbookWriter;

impl CsvWorkbookWriter {
    fn write_sheets(workbook: &Workbook, dir: &Path) -> Result<(), ExportError> {
        for (idx, sheet) in workbook.sheets.iter().enumerate() {
            let path = dir.join(format!("{:02}-{}.csv", idx + 1, slug(&sheet.name)));
            let mut writer = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
            for row in sheet.grid() {
                writer.write_record(&row)?;
            }
            writer.flush()?;
        }
        fs::write(dir.join(MARKER_FILE), env!("CARGO_PKG_VERSION"))?;
        Ok(())
    }

    /// Files inside `dir` that an export is allowed to delete.
    ///
    /// Returns `None` when the directory holds anything this writer would not
    /// have produced.
    fn previous_export(dir: &Path) -> Result<Option<Vec<PathBuf>>, ExportError> {
        let mut owned = Vec::new();
        let mut has_marker = false;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !entry.file_type()?.is_file() {
                return Ok(None);
            }
            if name == MARKER_FILE {
                has_marker = true;
            } else if !is_sheet_file(&name) {
                return Ok(None);
            }
            owned.push(entry.path());
        }
        Ok((has_marker || owned.is_empty()).then_some(owned))
    }
}

fn is_sheet_file(name: &str) -> bool {
    let bytes = name.as_bytes();
    name.ends_with(".csv")
        && bytes.len() > 7
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
}

/// `destination` resolved to a parent and a plain final component.
fn split_destination(destination: &Path) -> Result<(PathBuf, &std::ffi::OsStr), ExportError> {
    let name = destination.file_name().ok_or_else(|| {
        ExportError::Destination(format!(
            "`{}` does not name a directory",
            destination.display()
        ))
    })?;
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((parent, name))
}

impl WorkbookSerializer for CsvWorkbookWriter {
    fn write(&self, workbook: &Workbook, destination: &Path) -> Result<(), ExportError> {
        let (parent, name) = split_destination(destination)?;
        let replaced = if destination.is_dir() {
            Some(Self::previous_export(destination)?.ok_or_else(|| {
                ExportError::Destination(format!(
                    "`{}` already holds files that were not written by an export",
                    destination.display()
                ))
            })?)
        } else if destination.exists() {
            return Err(ExportError::Destination(format!(
                "`{}` is a file; CSV export needs a directory",
                destination.display()
            )));
        } else {
            None
        };

        fs::create_dir_all(&parent)?;
        // Dropping the guard on any early return removes the staging directory.
        let staging = tempfile::Builder::new()
            .prefix(&format!(".{}.", name.to_string_lossy()))
            .tempdir_in(&parent)?;
        Self::write_sheets(workbook, staging.path())?;

        if let Some(files) = replaced {
            for file in files {
                fs::remove_file(file)?;
            }
            fs::remove_dir(destination)?;
        }
        fs::rename(staging.path(), destination)?;
        tracing::info!(path = %destination.display(), sheets = workbook.sheets.len(), "wrote CSV workbook");
        Ok(())
    }
}
