//! Table detection over extracted page text.
//!
//! Detects tables by line alignment: a run of consecutive lines that
//! split into the same number of cells on wide gaps is treated as one
//! rectangular table. Works on flowed text, so no graphical line or
//! coordinate information is required.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TableRecord;

/// Splits a line into cells on tabs or runs of two-plus spaces.
static CELL_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+| {2,}").expect("CELL_SEPARATOR regex"));

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of rows to consider as table
    pub min_rows: usize,
    /// Minimum number of columns to consider as table
    pub min_columns: usize,
    /// Maximum number of columns (above this, likely accidental alignment)
    pub max_columns: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_columns: 2,
            max_columns: 12,
        }
    }
}

/// Detects tables in page text.
pub struct TableDetector {
    config: TableDetectorConfig,
}

impl TableDetector {
    /// Create a detector with default configuration.
    pub fn new() -> Self {
        Self {
            config: TableDetectorConfig::default(),
        }
    }

    /// Create a detector with custom configuration.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self { config }
    }

    /// Detect tables in one page's text.
    ///
    /// Returns zero or more tables; table indices count from 0 within
    /// the page.
    pub fn detect(&self, page_number: u32, text: &str) -> Vec<TableRecord> {
        let mut tables = Vec::new();
        let mut run: Vec<Vec<String>> = Vec::new();

        for line in text.lines() {
            let cells = split_cells(line);
            let tabular = self.is_tabular(&cells);

            // A line with a different cell count closes the current run.
            if tabular && (run.is_empty() || cells.len() == run[0].len()) {
                run.push(cells);
                continue;
            }

            self.flush_run(page_number, &mut run, &mut tables);
            if tabular {
                run.push(cells);
            }
        }
        self.flush_run(page_number, &mut run, &mut tables);

        log::debug!(
            "table detection: page {} yielded {} table(s)",
            page_number,
            tables.len()
        );
        tables
    }

    fn is_tabular(&self, cells: &[String]) -> bool {
        cells.len() >= self.config.min_columns && cells.len() <= self.config.max_columns
    }

    fn flush_run(&self, page_number: u32, run: &mut Vec<Vec<String>>, out: &mut Vec<TableRecord>) {
        if run.len() >= self.config.min_rows {
            let rows = std::mem::take(run);
            out.push(TableRecord::new(page_number, out.len(), rows));
        } else {
            run.clear();
        }
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Split one line into trimmed cells on wide gaps.
fn split_cells(line: &str) -> Vec<String> {
    CELL_SEPARATOR
        .split(line.trim())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
