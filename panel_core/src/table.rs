//! # Tables
//!
//! [`LoadedTable`] is the in-memory form of a tabular file: header names plus
//! rows of string cells. [`TableReader`] is the seam to whatever produces
//! one; [`CsvTableReader`] reads CSV files from disk.
//!
//! ## CSV rules
//!
//! - The first record is the header row
//! - Short rows are padded with empty cells
//! - A row with more fields than the header fails the whole load
//! - A file with no header at all fails the load
//!
//! A load either fully succeeds or returns an error; there are no partial tables.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PanelError, PanelResult};

/// Header names plus rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LoadedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        LoadedTable { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Keep only the last `n` rows, preserving their order.
    pub fn tail(mut self, n: usize) -> Self {
        let excess = self.rows.len().saturating_sub(n);
        self.rows.drain(..excess);
        self
    }
}

/// Produces a [`LoadedTable`] from a path.
///
/// Implementations must report a missing source as
/// [`PanelError::SourceNotFound`] and everything else as
/// [`PanelError::LoadFailed`].
pub trait TableReader {
    fn read_table(&self, path: &Path) -> PanelResult<LoadedTable>;
}

/// Reads comma-separated files with a header row.
#[derive(Debug, Clone, Copy)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        CsvTableReader { delimiter: b',' }
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        CsvTableReader { delimiter }
    }

    /// Parse CSV text from any reader. `source` is only used in error messages.
    pub fn parse<R: Read>(&self, input: R, source: &str) -> PanelResult<LoadedTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PanelError::load_failed(source, e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(PanelError::load_failed(source, "No columns to parse from file"));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| PanelError::load_failed(source, e.to_string()))?;

            if record.len() > headers.len() {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(PanelError::load_failed(
                    source,
                    format!(
                        "Expected {} fields in line {}, saw {}",
                        headers.len(),
                        line,
                        record.len()
                    ),
                ));
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(LoadedTable { headers, rows })
    }
}

impl TableReader for CsvTableReader {
    fn read_table(&self, path: &Path) -> PanelResult<LoadedTable> {
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PanelError::source_not_found(&source),
            _ => PanelError::load_failed(&source, e.to_string()),
        })?;

        self.parse(file, &source)
    }
}
