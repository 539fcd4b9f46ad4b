//! # Catalogs
//!
//! Static lookup tables handed to the controller at construction:
//!
//! - [`CategoryCatalog`]: category name -> items shown in the main panel
//! - [`IndexCatalog`]: index display name -> summary table path
//!
//! Both keep insertion order, which is the order the side list and the index
//! buttons are drawn in.
//!
//! ## JSON shape
//!
//! A category maps either to a list of items or, for a placeholder category,
//! to a single instruction string:
//!
//! ```json
//! {
//!   "Fruits": ["Apple", "Banana", "Cherry"],
//!   "Stocks": "Click a button below to view data:"
//! }
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Name of the built-in placeholder category
pub const STOCKS_CATEGORY: &str = "Stocks";

/// Instruction text shown for the placeholder category
pub const STOCKS_INSTRUCTIONS: &str = "Click a button below to view data:";

static DEFAULT_CATEGORIES: Lazy<CategoryCatalog> = Lazy::new(|| {
    let mut catalog = CategoryCatalog::new();
    catalog.insert_items("Fruits", ["Apple", "Banana", "Cherry"]);
    catalog.insert_items("Cars", ["Toyota", "Ford", "BMW"]);
    catalog.insert_items("Students", ["Alice", "Bob", "Charlie"]);
    catalog.insert_placeholder(STOCKS_CATEGORY, STOCKS_INSTRUCTIONS);
    catalog
});

static DEFAULT_INDEXES: Lazy<IndexCatalog> = Lazy::new(|| {
    let mut catalog = IndexCatalog::new();
    catalog.insert("S&P 500", "data/summary/wikipedia_sp500.csv");
    catalog.insert("Nasdaq Composite", "data/summary/wikipedia_nasdaq.csv");
    catalog.insert("Dow Jones", "data/summary/wikipedia_dowjones.csv");
    catalog
});

/// What a category shows in the main panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// Ordinary category: items are listed one per line
    Items(Vec<String>),
    /// Placeholder category: a fixed instruction string
    Placeholder(String),
}

impl CategoryEntry {
    /// Body text for the main panel
    pub fn body(&self) -> String {
        match self {
            CategoryEntry::Items(items) => items.join("\n"),
            CategoryEntry::Placeholder(text) => text.trim().to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CategoryEntry::Placeholder(_))
    }
}

/// Ordered category name -> entry mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    entries: IndexMap<String, CategoryEntry>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ordinary category with its items, replacing any previous entry.
    pub fn insert_items<I, S>(&mut self, name: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.insert(name.into(), CategoryEntry::Items(items));
    }

    /// Add a placeholder category that shows `text` instead of a list.
    pub fn insert_placeholder(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries
            .insert(name.into(), CategoryEntry::Placeholder(text.into()));
    }

    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries.get(name)
    }

    /// Category names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered index display name -> summary file path mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexCatalog {
    entries: IndexMap<String, PathBuf>,
}

impl IndexCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    pub fn path_for(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Index names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in demo categories (Fruits, Cars, Students, Stocks)
pub fn default_categories() -> CategoryCatalog {
    DEFAULT_CATEGORIES.clone()
}

/// Built-in demo indexes (S&P 500, Nasdaq Composite, Dow Jones)
pub fn default_indexes() -> IndexCatalog {
    DEFAULT_INDEXES.clone()
}
