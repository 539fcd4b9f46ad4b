//! # Panel Display Controller
//!
//! Owns the selection state and the [`Screen`], and maps each user event to
//! a rendering of one panel. UI layers translate their own click events into
//! [`PanelEvent`]s and hand them to [`PanelController::dispatch`], or call the
//! `select_*` functions directly.
//!
//! Three independent selections are tracked (category, index, symbol). Each
//! one moves `Idle -> Loading -> Displayed | ErrorDisplayed` and re-enters
//! `Loading` on the next selection of the same kind. Selecting one kind never
//! touches the others' tables.
//!
//! Everything runs synchronously on the caller's thread.
//!
//! ## Example
//!
//! ```rust
//! use panel_core::config::PanelConfig;
//! use panel_core::controller::PanelController;
//!
//! let mut controller = PanelController::new(PanelConfig::default());
//! controller.select_category("Fruits");
//!
//! assert_eq!(controller.screen().main_label, "Main Panel: Fruits");
//! assert_eq!(controller.screen().main_text, "Apple\nBanana\nCherry");
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::PanelConfig;
use crate::display::{Screen, TableRegion, MAIN_PANEL_LABEL};
use crate::errors::PanelResult;
use crate::table::{CsvTableReader, LoadedTable, TableReader};

/// Column of the stocks table that holds the symbol
pub const SYMBOL_COLUMN: usize = 0;

/// User interactions the controller understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelEvent {
    /// A side-list category was clicked
    CategorySelected(String),
    /// An index button was clicked
    IndexSelected(String),
    /// A cell of the stocks table was clicked
    StocksCellClicked { row: usize, column: usize },
    /// File > Open picked a table file
    TableOpened(PathBuf),
    /// File > New
    Reset,
}

/// Lifecycle of one selection kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Displayed,
    ErrorDisplayed,
}

/// The current value and state of one selection kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub current: Option<String>,
    pub state: LoadState,
    /// When the last load finished (successfully or not)
    pub updated_at: Option<DateTime<Utc>>,
}

impl Selection {
    fn begin(&mut self, value: &str) {
        self.current = Some(value.to_string());
        self.state = LoadState::Loading;
    }

    fn finish(&mut self, state: LoadState) {
        self.state = state;
        self.updated_at = Some(Utc::now());
    }
}

/// All three selection kinds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub category: Selection,
    pub index: Selection,
    pub symbol: Selection,
}

/// Maps selection events onto the [`Screen`].
pub struct PanelController<R: TableReader = CsvTableReader> {
    config: PanelConfig,
    reader: R,
    screen: Screen,
    selection: SelectionState,
}

impl PanelController<CsvTableReader> {
    /// Controller reading CSV files from disk
    pub fn new(config: PanelConfig) -> Self {
        Self::with_reader(config, CsvTableReader::new())
    }
}

impl<R: TableReader> PanelController<R> {
    /// Controller with a custom table source.
    ///
    /// A zero `history_tail` is raised to one row.
    pub fn with_reader(mut config: PanelConfig, reader: R) -> Self {
        if config.history_tail == 0 {
            warn!("history_tail of 0 raised to 1");
            config.history_tail = 1;
        }

        PanelController {
            config,
            reader,
            screen: Screen::default(),
            selection: SelectionState::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Side-list entries in display order
    pub fn category_names(&self) -> Vec<String> {
        self.config.categories.names().map(str::to_string).collect()
    }

    /// Index buttons in display order
    pub fn index_names(&self) -> Vec<String> {
        self.config.indexes.names().map(str::to_string).collect()
    }

    /// Route one event to its handler
    pub fn dispatch(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::CategorySelected(name) => self.select_category(&name),
            PanelEvent::IndexSelected(name) => self.select_index(&name),
            PanelEvent::StocksCellClicked { row, column } => {
                self.select_symbol_from_table(row, column)
            }
            PanelEvent::TableOpened(path) => self.open_table(&path),
            PanelEvent::Reset => self.reset(),
        }
    }

    /// Show a category in the main panel.
    ///
    /// Unknown categories render an empty body; this never fails.
    pub fn select_category(&mut self, name: &str) {
        self.selection.category.begin(name);

        let body = match self.config.categories.get(name) {
            Some(entry) => entry.body(),
            None => {
                debug!(category = name, "Unknown category, showing empty body");
                String::new()
            }
        };

        self.screen.main_label = format!("{}: {}", MAIN_PANEL_LABEL, name);
        self.screen.main_text = body;
        self.selection.category.finish(LoadState::Displayed);
    }

    /// Load an index summary into the stocks table.
    ///
    /// Unknown index names are ignored.
    pub fn select_index(&mut self, name: &str) {
        let Some(path) = self.config.index_path(name) else {
            debug!(index = name, "Unknown index, ignoring");
            return;
        };

        self.selection.index.begin(name);
        let result = self.reader.read_table(&path);
        let state = self.show_result(TableRegion::Stocks, &path, result);
        self.selection.index.finish(state);
    }

    /// Handle a click on the stocks table.
    ///
    /// Only clicks in the symbol column do anything: the clicked symbol's
    /// history file is loaded, trimmed to the configured tail, and shown in
    /// the history table.
    pub fn select_symbol_from_table(&mut self, row: usize, column: usize) {
        if column != SYMBOL_COLUMN {
            debug!(row, column, "Click outside symbol column, ignoring");
            return;
        }

        let Some(symbol) = self
            .screen
            .stocks
            .cell(row, SYMBOL_COLUMN)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
        else {
            debug!(row, "No symbol at clicked row, ignoring");
            return;
        };

        let Some(path) = self.config.history_path(&symbol) else {
            warn!(symbol = %symbol, "Symbol is not a plain file name, ignoring");
            return;
        };

        self.selection.symbol.begin(&symbol);
        let tail = self.config.history_tail;
        let result = self.reader.read_table(&path).map(|t| t.tail(tail));

        let state = match result {
            Ok(table) if table.is_empty() => {
                info!(symbol = %symbol, path = %path.display(), "History file has no rows");
                self.screen.main_text = format!("No data found in {}.", path.display());
                self.screen.history.reset();
                self.screen.status = format!("No history rows for {}", symbol);
                LoadState::Displayed
            }
            other => self.show_result(TableRegion::History, &path, other),
        };
        self.selection.symbol.finish(state);
    }

    /// Load an arbitrary table file into the stocks table (File > Open).
    pub fn open_table(&mut self, path: &Path) {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.selection.index.begin(&label);
        let result = self.reader.read_table(path);
        let state = self.show_result(TableRegion::Stocks, path, result);
        self.selection.index.finish(state);
    }

    /// Return every panel and selection to its startup state (File > New).
    pub fn reset(&mut self) {
        info!("Resetting panels");
        self.screen = Screen::default();
        self.selection = SelectionState::default();
    }

    /// Render a load outcome into `region`, reporting errors in the main panel.
    fn show_result(
        &mut self,
        region: TableRegion,
        path: &Path,
        result: PanelResult<LoadedTable>,
    ) -> LoadState {
        match result {
            Ok(table) => {
                info!(
                    region = region.display_name(),
                    path = %path.display(),
                    rows = table.row_count(),
                    columns = table.column_count(),
                    "Loaded table"
                );
                self.screen.table_mut(region).show(&table);
                self.screen.status = format!(
                    "{}: {} rows from {}",
                    region.display_name(),
                    table.row_count(),
                    path.display()
                );
                LoadState::Displayed
            }
            Err(err) => {
                warn!(
                    region = region.display_name(),
                    code = err.error_code(),
                    "{}",
                    err
                );
                self.screen.main_text = err.user_message();
                self.screen.table_mut(region).reset();
                self.screen.status = format!("{}: load failed", region.display_name());
                LoadState::ErrorDisplayed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryCatalog, IndexCatalog, STOCKS_CATEGORY, STOCKS_INSTRUCTIONS};
    use crate::errors::PanelError;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// In-memory table source keyed by path; counts reads
    #[derive(Default)]
    struct MemoryReader {
        tables: HashMap<PathBuf, PanelResult<LoadedTable>>,
        reads: Cell<usize>,
    }

    impl MemoryReader {
        fn with(mut self, path: &str, table: LoadedTable) -> Self {
            self.tables.insert(PathBuf::from(path), Ok(table));
            self
        }

        fn with_error(mut self, path: &str, err: PanelError) -> Self {
            self.tables.insert(PathBuf::from(path), Err(err));
            self
        }
    }

    impl TableReader for MemoryReader {
        fn read_table(&self, path: &Path) -> PanelResult<LoadedTable> {
            self.reads.set(self.reads.get() + 1);
            self.tables
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(PanelError::source_not_found(path.display().to_string())))
        }
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> LoadedTable {
        LoadedTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn summary() -> LoadedTable {
        table(
            &["Symbol", "Security", "Sector"],
            &[
                &["AAPL", "Apple Inc.", "Information Technology"],
                &["KO", "Coca-Cola", "Consumer Staples"],
                &["", "Blank", "None"],
            ],
        )
    }

    fn test_config() -> PanelConfig {
        let mut indexes = IndexCatalog::new();
        indexes.insert("Dow Jones", "summary/dow.csv");
        indexes.insert("Tiny", "summary/tiny.csv");
        indexes.insert("Missing", "summary/missing.csv");
        indexes.insert("Broken", "summary/broken.csv");

        PanelConfig {
            data_dir: PathBuf::from("/data"),
            history_dir: PathBuf::from("history"),
            indexes,
            ..PanelConfig::default()
        }
    }

    fn controller() -> PanelController<MemoryReader> {
        let history = LoadedTable::new(
            vec!["Date".into(), "Close".into()],
            (0..150)
                .map(|i| vec![format!("2024-{:03}", i), (100 + i).to_string()])
                .collect(),
        );

        let reader = MemoryReader::default()
            .with("/data/summary/dow.csv", summary())
            .with("/data/summary/tiny.csv", table(&["Symbol"], &[&["MMM"]]))
            .with_error(
                "/data/summary/broken.csv",
                PanelError::load_failed("/data/summary/broken.csv", "Expected 3 fields in line 4, saw 5"),
            )
            .with("/data/history/AAPL.csv", history)
            .with("/data/history/KO.csv", table(&["Date", "Close"], &[]));

        PanelController::with_reader(test_config(), reader)
    }

    #[test]
    fn test_known_category_lists_items_in_order() {
        let mut c = controller();
        for name in ["Fruits", "Cars", "Students"] {
            c.select_category(name);
            let expected = match c.config().categories.get(name).unwrap() {
                crate::catalog::CategoryEntry::Items(items) => items.join("\n"),
                _ => unreachable!(),
            };
            assert_eq!(c.screen().main_label, format!("Main Panel: {}", name));
            assert_eq!(c.screen().main_text, expected);
        }
        assert_eq!(c.screen().main_text, "Alice\nBob\nCharlie");
    }

    #[test]
    fn test_unknown_category_renders_empty_body() {
        let mut c = controller();
        c.select_category("Fruits");
        c.select_category("Planets");

        assert_eq!(c.screen().main_label, "Main Panel: Planets");
        assert_eq!(c.screen().main_text, "");
        assert_eq!(c.selection().category.state, LoadState::Displayed);
    }

    #[test]
    fn test_stocks_placeholder_shows_instructions() {
        let mut c = controller();
        c.select_category(STOCKS_CATEGORY);

        assert_eq!(c.screen().main_label, "Main Panel: Stocks");
        assert_eq!(c.screen().main_text, STOCKS_INSTRUCTIONS);
    }

    #[test]
    fn test_custom_catalog_from_config() {
        let mut categories = CategoryCatalog::new();
        categories.insert_items("Planets", ["Mercury", "Venus"]);
        let config = PanelConfig {
            categories,
            ..test_config()
        };

        let mut c = PanelController::with_reader(config, MemoryReader::default());
        c.select_category("Planets");
        assert_eq!(c.screen().main_text, "Mercury\nVenus");
        assert_eq!(c.category_names(), vec!["Planets"]);
    }

    #[test]
    fn test_select_index_displays_table() {
        let mut c = controller();
        c.select_index("Dow Jones");

        let stocks = &c.screen().stocks;
        assert_eq!(stocks.headers(), summary().headers.as_slice());
        assert_eq!(stocks.row_count(), 3);
        assert_eq!(stocks.cell(1, 0), Some("KO"));
        assert_eq!(c.selection().index.current.as_deref(), Some("Dow Jones"));
        assert_eq!(c.selection().index.state, LoadState::Displayed);
        assert_eq!(c.screen().status, "Stocks: 3 rows from /data/summary/dow.csv");
    }

    #[test]
    fn test_unknown_index_is_noop() {
        let mut c = controller();
        c.select_index("Dow Jones");
        let before = c.screen().clone();

        c.select_index("FTSE 100");

        assert_eq!(c.screen(), &before);
        assert_eq!(c.selection().index.current.as_deref(), Some("Dow Jones"));
        assert_eq!(c.reader.reads.get(), 1);
    }

    #[test]
    fn test_missing_index_file_shows_error_and_empty_table() {
        let mut c = controller();
        c.select_index("Dow Jones");
        c.select_index("Missing");

        assert_eq!(c.screen().main_text, "File not found: /data/summary/missing.csv");
        assert_eq!(c.screen().stocks.row_count(), 0);
        assert_eq!(c.selection().index.state, LoadState::ErrorDisplayed);
    }

    #[test]
    fn test_broken_index_file_shows_generic_error() {
        let mut c = controller();
        c.select_index("Broken");

        assert_eq!(c.screen().main_text, "Error: Expected 3 fields in line 4, saw 5");
        assert!(c.screen().stocks.is_empty());
    }

    #[test]
    fn test_smaller_index_leaves_no_stale_cells() {
        let mut c = controller();
        c.select_index("Dow Jones");
        c.select_index("Tiny");

        let stocks = &c.screen().stocks;
        assert_eq!(stocks.row_count(), 1);
        assert_eq!(stocks.column_count(), 1);
        assert_eq!(stocks.cell(0, 0), Some("MMM"));
        assert_eq!(stocks.cell(0, 1), None);
        assert_eq!(stocks.cell(1, 0), None);
        assert_eq!(stocks.headers(), &["Symbol".to_string()]);
    }

    #[test]
    fn test_symbol_click_outside_symbol_column_does_nothing() {
        let mut c = controller();
        c.select_index("Dow Jones");
        let before = c.screen().clone();
        let reads = c.reader.reads.get();

        c.select_symbol_from_table(0, 1);
        c.select_symbol_from_table(0, 2);

        assert_eq!(c.screen(), &before);
        assert_eq!(c.reader.reads.get(), reads);
        assert_eq!(c.selection().symbol.state, LoadState::Idle);
    }

    #[test]
    fn test_symbol_click_shows_last_rows_of_history() {
        let mut c = controller();
        c.select_index("Dow Jones");
        c.select_symbol_from_table(0, 0);

        let history = &c.screen().history;
        assert_eq!(history.row_count(), 100);
        assert_eq!(history.cell(0, 0), Some("2024-050"));
        assert_eq!(history.cell(99, 0), Some("2024-149"));
        assert_eq!(history.cell(99, 1), Some("249"));
        assert_eq!(c.selection().symbol.current.as_deref(), Some("AAPL"));
        assert_eq!(c.selection().symbol.state, LoadState::Displayed);
    }

    #[test]
    fn test_history_tail_follows_config() {
        let mut c = controller();
        c.config.history_tail = 10;
        c.select_index("Dow Jones");
        c.select_symbol_from_table(0, 0);

        assert_eq!(c.screen().history.row_count(), 10);
        assert_eq!(c.screen().history.cell(0, 0), Some("2024-140"));
    }

    #[test]
    fn test_symbol_with_empty_history() {
        let mut c = controller();
        c.select_index("Dow Jones");
        c.select_symbol_from_table(0, 0);
        c.select_symbol_from_table(1, 0);

        assert_eq!(c.screen().main_text, "No data found in /data/history/KO.csv.");
        assert!(c.screen().history.is_empty());
    }

    #[test]
    fn test_symbol_with_missing_history() {
        let mut c = controller();
        c.select_index("Tiny");
        c.select_symbol_from_table(0, 0);

        assert_eq!(c.screen().main_text, "File not found: /data/history/MMM.csv");
        assert!(c.screen().history.is_empty());
        assert_eq!(c.selection().symbol.state, LoadState::ErrorDisplayed);
        // The stocks table is untouched by history failures
        assert_eq!(c.screen().stocks.cell(0, 0), Some("MMM"));
    }

    #[test]
    fn test_click_on_blank_or_missing_row_is_ignored() {
        let mut c = controller();
        c.select_index("Dow Jones");
        let reads = c.reader.reads.get();

        c.select_symbol_from_table(2, 0);
        c.select_symbol_from_table(40, 0);

        assert_eq!(c.reader.reads.get(), reads);
        assert!(c.selection().symbol.current.is_none());
    }

    #[test]
    fn test_selections_are_independent() {
        let mut c = controller();
        c.select_index("Dow Jones");
        c.select_symbol_from_table(0, 0);
        c.select_category("Cars");

        assert_eq!(c.screen().stocks.row_count(), 3);
        assert_eq!(c.screen().history.row_count(), 100);
        assert_eq!(c.screen().main_text, "Toyota\nFord\nBMW");

        c.select_index("Tiny");
        assert_eq!(c.screen().history.row_count(), 100);
        assert_eq!(c.screen().main_label, "Main Panel: Cars");
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut c = controller();
        c.dispatch(PanelEvent::CategorySelected("Fruits".into()));
        c.dispatch(PanelEvent::IndexSelected("Dow Jones".into()));
        c.dispatch(PanelEvent::StocksCellClicked { row: 0, column: 0 });

        assert_eq!(c.screen().main_label, "Main Panel: Fruits");
        assert_eq!(c.screen().stocks.row_count(), 3);
        assert_eq!(c.screen().history.row_count(), 100);

        c.dispatch(PanelEvent::Reset);
        assert_eq!(c.screen(), &Screen::default());
        assert_eq!(c.selection(), &SelectionState::default());
    }

    #[test]
    fn test_open_table_uses_file_stem() {
        let mut c = controller();
        c.open_table(Path::new("/data/summary/dow.csv"));

        assert_eq!(c.selection().index.current.as_deref(), Some("dow"));
        assert_eq!(c.screen().stocks.row_count(), 3);
    }

    #[test]
    fn test_index_names_keep_catalog_order() {
        let c = controller();
        assert_eq!(c.index_names(), vec!["Dow Jones", "Tiny", "Missing", "Broken"]);
    }

    #[test]
    fn test_csv_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("summary")).unwrap();
        std::fs::create_dir_all(dir.path().join("history")).unwrap();
        std::fs::write(
            dir.path().join("summary/dow.csv"),
            "Symbol,Company,Exchange\nMMM,3M,NYSE\nAXP,American Express,NYSE\n",
        )
        .unwrap();

        let mut history = String::from("Date,Open,Close\n");
        for day in 0..120 {
            history.push_str(&format!("d{},{},{}\n", day, day, day + 1));
        }
        std::fs::write(dir.path().join("history/AXP.csv"), history).unwrap();

        let mut c = PanelController::new(test_config().with_data_dir(dir.path()));
        c.select_index("Dow Jones");
        assert_eq!(c.screen().stocks.headers(), &["Symbol", "Company", "Exchange"].map(String::from));
        assert_eq!(c.screen().stocks.row_count(), 2);

        c.select_symbol_from_table(1, 0);
        let shown = &c.screen().history;
        assert_eq!(shown.row_count(), 100);
        assert_eq!(shown.cell(0, 0), Some("d20"));
        assert_eq!(shown.cell(99, 2), Some("120"));

        c.select_index("Missing");
        assert_eq!(
            c.screen().main_text,
            format!("File not found: {}", dir.path().join("summary/missing.csv").display())
        );
        assert!(c.screen().stocks.is_empty());
        // History from the earlier symbol stays on screen
        assert_eq!(c.screen().history.row_count(), 100);
    }

    #[test]
    fn test_path_like_symbols_are_ignored() {
        let reader = MemoryReader::default()
            .with(
                "/data/summary/dow.csv",
                table(&["Symbol"], &[&["/etc/hostname_x"], &["../AAPL"], &["AAPL"]]),
            )
            .with("/data/history/AAPL.csv", table(&["Date"], &[&["2024-01-02"]]));
        let mut c = PanelController::with_reader(test_config(), reader);
        c.select_index("Dow Jones");
        let reads = c.reader.reads.get();

        c.select_symbol_from_table(0, 0);
        c.select_symbol_from_table(1, 0);

        assert_eq!(c.reader.reads.get(), reads);
        assert!(c.selection().symbol.current.is_none());
        assert!(c.screen().history.is_empty());

        c.select_symbol_from_table(2, 0);
        assert_eq!(c.screen().history.row_count(), 1);
    }

    #[test]
    fn test_zero_history_tail_is_raised_to_one() {
        let config = PanelConfig {
            history_tail: 0,
            ..test_config()
        };
        let reader = MemoryReader::default()
            .with("/data/summary/tiny.csv", table(&["Symbol"], &[&["MMM"]]))
            .with(
                "/data/history/MMM.csv",
                table(&["Date"], &[&["2024-01-02"], &["2024-01-03"]]),
            );
        let mut c = PanelController::with_reader(config, reader);
        assert_eq!(c.config().history_tail, 1);

        c.select_index("Tiny");
        c.select_symbol_from_table(0, 0);

        assert_eq!(c.screen().history.row_count(), 1);
        assert_eq!(c.screen().history.cell(0, 0), Some("2024-01-03"));
        assert_eq!(c.selection().symbol.state, LoadState::Displayed);
    }

    #[test]
    fn test_default_config_reports_relative_paths() {
        let mut c = PanelController::with_reader(PanelConfig::default(), MemoryReader::default());
        c.select_index("S&P 500");

        assert_eq!(
            c.screen().main_text,
            "File not found: data/summary/wikipedia_sp500.csv"
        );
    }
}
