//! UI module for the Panel Demo GUI
//!
//! # Window Structure
//! - `menu_bar` - File (New, Open, Exit) and Help (About) menus
//! - `toolbar` - New, Open, Exit shortcuts
//! - `side_panel` - Left list of categories
//! - `main_panel` - Category label, read-only text body, index buttons
//! - `table_panel` - Stocks table (clickable symbols) and stock history table
//! - `status_bar` - Bottom status message
//! - `modal` - About dialog overlay

pub mod menu_bar;
pub mod toolbar;
pub mod side_panel;
pub mod main_panel;
pub mod table_panel;
pub mod status_bar;
pub mod modal;
