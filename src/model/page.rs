//! Page-level types.

use super::TableRecord;
use serde::{Deserialize, Serialize};

/// Content recovered from a single page.
///
/// Produced and consumed within one extraction run; pages with no
/// recoverable text layer carry an empty `text` but still exist, so the
/// page count always reflects the true number of pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub number: u32,

    /// Raw extracted text, possibly empty
    pub text: String,

    /// Tables detected on this page
    pub tables: Vec<TableRecord>,
}

impl PageContent {
    /// Create a new page with the given text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            tables: Vec::new(),
        }
    }

    /// Create an empty page (no text layer).
    pub fn empty(number: u32) -> Self {
        Self::new(number, String::new())
    }

    /// Add a detected table to the page.
    pub fn add_table(&mut self, table: TableRecord) {
        self.tables.push(table);
    }

    /// Check whether the page has any non-whitespace text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Check whether the page carries neither text nor tables.
    pub fn is_empty(&self) -> bool {
        !self.has_text() && self.tables.is_empty()
    }
}
