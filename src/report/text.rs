//! Plain-text preview of a laid-out sheet for terminals.

use super::sheet::{Alignment, Cell, Sheet};

/// Preview rendering knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewStyle {
    pub max_width: usize,
    pub padding: usize,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            max_width: 24,
            padding: 1,
        }
    }
}

/// Renders the sheet name, a rule, then every grid row with aligned columns.
pub fn render_sheet(sheet: &Sheet, style: PreviewStyle) -> String {
    let grid = sheet.cell_grid();
    let widths = compute_widths(&grid, style.max_width);
    let mut out = String::new();
    out.push_str(&sheet.name);
    out.push('\n');
    out.push_str(&horizontal_rule(&widths, style.padding));
    for row in &grid {
        out.push('\n');
        let rendered: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| match cell {
                Some(cell) => render_cell(&cell.text, width, cell.alignment, style.padding),
                None => render_cell("", width, Alignment::Left, style.padding),
            })
            .collect();
        out.push_str(rendered.join(" ").trim_end());
    }
    out
}

fn compute_widths(grid: &[Vec<Option<Cell>>], max_width: usize) -> Vec<usize> {
    let cols = grid.first().map(Vec::len).unwrap_or(0);
    (0..cols)
        .map(|col| {
            grid.iter()
                .filter_map(|row| row[col].as_ref())
                .map(|cell| visible_width(&cell.text))
                .max()
                .unwrap_or(0)
                .min(max_width)
        })
        .collect()
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }
    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - (remaining / 2)),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding + left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces + padding));
    cell
}

fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sheet::{CellRef, SheetBlock};

    #[test]
    fn cells_respect_alignment_and_truncation() {
        assert_eq!(render_cell("Kas", 5, Alignment::Left, 1), " Kas   ");
        assert_eq!(render_cell("1.000", 7, Alignment::Right, 0), "  1.000");
        assert_eq!(render_cell("Pendapatan Jasa", 6, Alignment::Left, 0), "Penda…");
    }

    #[test]
    fn preview_lists_every_grid_row() {
        let mut block = SheetBlock::table(
            CellRef::default(),
            "Neraca Saldo",
            vec!["Akun".into(), "Debit".into()],
            18,
        );
        block.rows.push(vec![Cell::text("Kas"), Cell::amount("2.000.000")]);
        let mut sheet = Sheet::new("Neraca Saldo");
        sheet.blocks.push(block);

        let text = render_sheet(&sheet, PreviewStyle::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Neraca Saldo");
        assert!(lines[4].ends_with("2.000.000"));
        assert!(lines[4].starts_with(" Kas"));
    }
}
