//! # Error Types
//!
//! Structured error types for panel_core. Table loads recognize exactly two
//! failure kinds, [`PanelError::SourceNotFound`] and the catch-all
//! [`PanelError::LoadFailed`]. The controller turns both into text for the
//! main panel; neither is fatal.
//!
//! ## Example
//!
//! ```rust
//! use panel_core::errors::{PanelError, PanelResult};
//!
//! fn require_columns(path: &str, columns: usize) -> PanelResult<()> {
//!     if columns == 0 {
//!         return Err(PanelError::load_failed(path, "No columns to parse from file"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_columns("data/empty.csv", 0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for panel_core operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Structured error type for table loads and configuration.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PanelError {
    /// The backing file for an index or symbol does not exist
    #[error("File not found: {path}")]
    SourceNotFound { path: String },

    /// Any other failure while reading or parsing a table
    #[error("Failed to load '{path}': {reason}")]
    LoadFailed { path: String, reason: String },

    /// Configuration file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    Config { path: String, reason: String },
}

impl PanelError {
    /// Create a SourceNotFound error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        PanelError::SourceNotFound { path: path.into() }
    }

    /// Create a LoadFailed error
    pub fn load_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PanelError::LoadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PanelError::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PanelError::SourceNotFound { .. })
    }

    /// Text shown in the main panel when a load fails.
    ///
    /// Not-found reports the path; everything else reports the failure detail.
    pub fn user_message(&self) -> String {
        match self {
            PanelError::SourceNotFound { path } => format!("File not found: {}", path),
            PanelError::LoadFailed { reason, .. } => format!("Error: {}", reason),
            PanelError::Config { .. } => format!("Error: {}", self),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PanelError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            PanelError::LoadFailed { .. } => "LOAD_FAILED",
            PanelError::Config { .. } => "CONFIG_ERROR",
        }
    }
}
