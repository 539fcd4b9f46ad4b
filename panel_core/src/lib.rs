//! # panel_core - Panel Display Controller
//!
//! `panel_core` holds the UI-independent logic of the Panel Demo: a side list
//! of categories, a main text panel, and two tables fed from CSV files. Front
//! ends (the Iced GUI, the terminal CLI) bind their own click events to the
//! controller and draw the [`Screen`] it maintains.
//!
//! ## Quick Start
//!
//! ```rust
//! use panel_core::{PanelConfig, PanelController, PanelEvent};
//!
//! let mut controller = PanelController::new(PanelConfig::default());
//! controller.dispatch(PanelEvent::CategorySelected("Stocks".to_string()));
//!
//! assert_eq!(controller.screen().main_text, "Click a button below to view data:");
//! ```
//!
//! ## Modules
//!
//! - [`controller`] - Selection state machine and event dispatch
//! - [`display`] - Screen model the controller renders into
//! - [`table`] - Loaded tables and the CSV reader
//! - [`catalog`] - Category and index catalogs
//! - [`config`] - JSON configuration
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CategoryCatalog, CategoryEntry, IndexCatalog};
pub use config::PanelConfig;
pub use controller::{LoadState, PanelController, PanelEvent, SelectionState};
pub use display::{Screen, TableGrid, TableRegion};
pub use errors::{PanelError, PanelResult};
pub use table::{CsvTableReader, LoadedTable, TableReader};
