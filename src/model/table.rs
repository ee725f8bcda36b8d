//! Table types.

use serde::{Deserialize, Serialize};

/// A rectangular grid of cell values extracted from one page.
///
/// Rows are padded to a uniform width; cells with no text are empty
/// strings, never absent. A table has no identity beyond its position
/// (page number plus index within that page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRecord {
    /// Page the table was found on (1-indexed)
    pub page: u32,

    /// Index of the table within that page (0-based)
    pub index: usize,

    /// Cell values, row-major
    pub rows: Vec<Vec<String>>,
}

impl TableRecord {
    /// Create a table from rows of cells, padding every row to the
    /// width of the widest row.
    pub fn new(page: u32, index: usize, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { page, index, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell value, if the position exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column)).map(String::as_str)
    }

    /// Plain text representation: tab-separated cells, newline-separated rows.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
