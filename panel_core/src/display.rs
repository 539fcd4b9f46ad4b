//! # Display Model
//!
//! The render targets the controller writes into. UI layers draw a
//! [`Screen`] and never mutate it themselves.
//!
//! ```text
//! Screen
//! ├── main_label: "Main Panel: {category}"
//! ├── main_text:  category body or load error text
//! ├── stocks:     TableGrid (index summary, symbols in column 0)
//! ├── history:    TableGrid (per-symbol history)
//! └── status:     status bar message
//! ```

use serde::{Deserialize, Serialize};

use crate::table::LoadedTable;

/// Label shown before any category is selected
pub const MAIN_PANEL_LABEL: &str = "Main Panel";

/// Status bar text at startup
pub const READY_STATUS: &str = "Ready";

/// Which table region an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableRegion {
    /// Index summary table
    Stocks,
    /// Symbol history table
    History,
}

impl TableRegion {
    pub fn display_name(&self) -> &'static str {
        match self {
            TableRegion::Stocks => "Stocks",
            TableRegion::History => "Stock History",
        }
    }
}

/// A grid of optional string cells with a header row.
///
/// Cells are addressed by `(row, column)`. Resizing keeps whatever cells fall
/// inside the new bounds, so writers call [`TableGrid::clear_contents`]
/// before writing a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    headers: Vec<String>,
    cells: Vec<Vec<Option<String>>>,
    column_count: usize,
}

impl TableGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column)?.as_deref()
    }

    /// Iterate rows as slices of optional cells
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn set_row_count(&mut self, rows: usize) {
        let columns = self.column_count;
        self.cells.resize_with(rows, || vec![None; columns]);
    }

    pub fn set_column_count(&mut self, columns: usize) {
        self.column_count = columns;
        for row in &mut self.cells {
            row.resize(columns, None);
        }
        self.headers.resize(columns, String::new());
    }

    /// Set header labels; extra labels beyond the column count are ignored.
    pub fn set_headers(&mut self, headers: &[String]) {
        for (slot, label) in self.headers.iter_mut().zip(headers) {
            slot.clone_from(label);
        }
    }

    /// Write one cell. Out-of-bounds writes are ignored.
    pub fn set_cell(&mut self, row: usize, column: usize, value: impl Into<String>) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = Some(value.into());
        }
    }

    /// Empty every cell, keeping dimensions and headers.
    pub fn clear_contents(&mut self) {
        for row in &mut self.cells {
            row.iter_mut().for_each(|cell| *cell = None);
        }
    }

    /// Drop all rows, columns and headers.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.headers.clear();
        self.column_count = 0;
    }

    /// Replace the grid with `table`, clearing previous cells first.
    pub fn show(&mut self, table: &LoadedTable) {
        self.clear_contents();
        self.set_row_count(table.row_count());
        self.set_column_count(table.column_count());
        self.set_headers(&table.headers);

        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                self.set_cell(row_idx, col_idx, value.as_str());
            }
        }
    }
}

/// Everything visible in the window, as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub main_label: String,
    pub main_text: String,
    pub stocks: TableGrid,
    pub history: TableGrid,
    pub status: String,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            main_label: MAIN_PANEL_LABEL.to_string(),
            main_text: String::new(),
            stocks: TableGrid::new(),
            history: TableGrid::new(),
            status: READY_STATUS.to_string(),
        }
    }
}

impl Screen {
    pub fn table(&self, region: TableRegion) -> &TableGrid {
        match region {
            TableRegion::Stocks => &self.stocks,
            TableRegion::History => &self.history,
        }
    }

    pub fn table_mut(&mut self, region: TableRegion) -> &mut TableGrid {
        match region {
            TableRegion::Stocks => &mut self.stocks,
            TableRegion::History => &mut self.history,
        }
    }
}
