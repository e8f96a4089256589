//! Periodized report layout: sheets of positioned, pre-formatted blocks.

pub mod labels;
pub mod layout;
pub mod sheet;
pub mod text;

pub use labels::{Labels, Language};
pub use layout::{LayoutEngine, LayoutMode, LayoutOptions, ReportInput};
pub use sheet::{Alignment, BlockKind, Cell, CellRef, MergeRange, Sheet, SheetBlock, Workbook};
