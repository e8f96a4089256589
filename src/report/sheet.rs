//! Abstract, already-formatted sheet regions handed to the workbook serializer.

use serde::{Deserialize, Serialize};

/// Describes how a cell should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Zero-based sheet coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub alignment: Alignment,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
        }
    }

    /// A currency cell; `text` must already be formatted.
    pub fn amount(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Right,
        }
    }

    pub fn blank() -> Self {
        Self::text("")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Title-only row, e.g. a year banner.
    Banner,
    /// Title, header row, data rows, optional subtotal.
    Table,
    /// Stands in for a section with no data.
    Placeholder,
}

/// A titled, bordered region of a sheet with its position already resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetBlock {
    pub kind: BlockKind,
    pub anchor: CellRef,
    pub title: String,
    /// Number of columns the block spans; the title is merged across all of them.
    pub width: usize,
    pub column_headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Vec<Cell>>,
    /// Suggested column width in characters for every spanned column.
    pub column_width: u16,
}

impl SheetBlock {
    pub fn banner(anchor: CellRef, title: impl Into<String>, width: usize, column_width: u16) -> Self {
        Self {
            kind: BlockKind::Banner,
            anchor,
            title: title.into(),
            width: width.max(1),
            column_headers: Vec::new(),
            rows: Vec::new(),
            subtotal: None,
            column_width,
        }
    }

    pub fn table(
        anchor: CellRef,
        title: impl Into<String>,
        column_headers: Vec<String>,
        column_width: u16,
    ) -> Self {
        Self {
            kind: BlockKind::Table,
            anchor,
            title: title.into(),
            width: column_headers.len().max(1),
            column_headers,
            rows: Vec::new(),
            subtotal: None,
            column_width,
        }
    }

    pub fn placeholder(anchor: CellRef, title: impl Into<String>, message: impl Into<String>, column_width: u16) -> Self {
        Self {
            kind: BlockKind::Placeholder,
            anchor,
            title: title.into(),
            width: 1,
            column_headers: Vec::new(),
            rows: vec![vec![Cell::text(message)]],
            subtotal: None,
            column_width,
        }
    }

    /// Rows occupied, including title, header, and subtotal rows.
    pub fn height(&self) -> usize {
        let header = usize::from(!self.column_headers.is_empty());
        let subtotal = usize::from(self.subtotal.is_some());
        1 + header + self.rows.len() + subtotal
    }

    /// Row index just past the block's last row.
    pub fn end_row(&self) -> usize {
        self.anchor.row + self.height()
    }

    pub fn end_col(&self) -> usize {
        self.anchor.col + self.width
    }

    /// Sheet row of the column-header row, if the block has one.
    pub fn header_row(&self) -> Option<usize> {
        (!self.column_headers.is_empty()).then_some(self.anchor.row + 1)
    }

    /// Yields every populated cell with its absolute position, in row-major order.
    pub fn cells(&self) -> Vec<(CellRef, Cell)> {
        let mut out = Vec::new();
        let mut row = self.anchor.row;
        out.push((CellRef::new(row, self.anchor.col), Cell::text(self.title.clone())));
        row += 1;
        if !self.column_headers.is_empty() {
            for (offset, header) in self.column_headers.iter().enumerate() {
                out.push((CellRef::new(row, self.anchor.col + offset), Cell::text(header.clone())));
            }
            row += 1;
        }
        for data in self.rows.iter().chain(self.subtotal.iter()) {
            for (offset, cell) in data.iter().enumerate() {
                out.push((CellRef::new(row, self.anchor.col + offset), cell.clone()));
            }
            row += 1;
        }
        out
    }
}

/// A rectangular merged range, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRange {
    pub first: CellRef,
    pub last: CellRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub blocks: Vec<SheetBlock>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.blocks.iter().map(SheetBlock::end_row).max().unwrap_or(0)
    }

    pub fn col_count(&self) -> usize {
        self.blocks.iter().map(SheetBlock::end_col).max().unwrap_or(0)
    }

    /// Dense cell grid of the sheet; `None` marks unpopulated positions.
    pub fn cell_grid(&self) -> Vec<Vec<Option<Cell>>> {
        let mut grid = vec![vec![None; self.col_count()]; self.row_count()];
        for block in &self.blocks {
            for (at, cell) in block.cells() {
                grid[at.row][at.col] = Some(cell);
            }
        }
        grid
    }

    /// Dense text grid of the sheet; unpopulated cells are empty strings.
    pub fn grid(&self) -> Vec<Vec<String>> {
        self.cell_grid()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map(|c| c.text).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Title cells that span more than one column.
    pub fn merges(&self) -> Vec<MergeRange> {
        self.blocks
            .iter()
            .filter(|block| block.width > 1)
            .map(|block| MergeRange {
                first: block.anchor,
                last: CellRef::new(block.anchor.row, block.end_col() - 1),
            })
            .collect()
    }

    /// Per-column width hints, taking the widest block covering each column.
    pub fn column_widths(&self) -> Vec<u16> {
        let mut widths = vec![0u16; self.col_count()];
        for block in &self.blocks {
            for col in block.anchor.col..block.end_col() {
                widths[col] = widths[col].max(block.column_width);
            }
        }
        widths
    }
}

/// The full report: one sheet per section, in export order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> SheetBlock {
        let mut block = SheetBlock::table(
            CellRef::new(2, 1),
            "Januari 2025",
            vec!["Akun".into(), "Debit".into()],
            18,
        );
        block.rows.push(vec![Cell::text("Kas"), Cell::amount("1.000")]);
        block.subtotal = Some(vec![Cell::text("Jumlah"), Cell::amount("1.000")]);
        block
    }

    #[test]
    fn block_geometry_counts_every_row() {
        let block = sample_block();
        assert_eq!(block.height(), 4);
        assert_eq!(block.end_row(), 6);
        assert_eq!(block.end_col(), 3);
        assert_eq!(block.header_row(), Some(3));
    }

    #[test]
    fn grid_places_cells_at_resolved_coordinates() {
        let mut sheet = Sheet::new("Laporan");
        sheet.blocks.push(sample_block());
        let grid = sheet.grid();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[2][1], "Januari 2025");
        assert_eq!(grid[3][2], "Debit");
        assert_eq!(grid[4][1], "Kas");
        assert_eq!(grid[5][2], "1.000");
        assert_eq!(grid[0][0], "");

        assert_eq!(
            sheet.merges(),
            vec![MergeRange {
                first: CellRef::new(2, 1),
                last: CellRef::new(2, 2),
            }]
        );
        assert_eq!(sheet.column_widths(), vec![0, 18, 18]);
    }

    #[test]
    fn empty_sheet_has_no_grid() {
        let sheet = Sheet::new("Kosong");
        assert!(sheet.grid().is_empty());
        assert!(sheet.merges().is_empty());
    }
}
