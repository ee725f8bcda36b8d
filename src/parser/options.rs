//! Extraction options and configuration.

use serde::{Deserialize, Serialize};

/// Options recognized by the extraction orchestrator.
///
/// Each invocation is a pure function of (file, options); there is no
/// environment-derived or process-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Whether to detect tables on each page
    pub extract_tables: bool,

    /// Whether to run the NC-code detection pipeline
    pub extract_nc_codes: bool,

    /// Files larger than this are skipped, not rejected
    pub max_file_size_mb: f64,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable table extraction.
    pub fn with_tables(mut self, extract: bool) -> Self {
        self.extract_tables = extract;
        self
    }

    /// Enable or disable the NC-code pipeline.
    pub fn with_nc_codes(mut self, extract: bool) -> Self {
        self.extract_nc_codes = extract;
        self
    }

    /// Set the file size ceiling in megabytes.
    pub fn with_max_file_size_mb(mut self, mb: f64) -> Self {
        self.max_file_size_mb = mb;
        self
    }

    /// The size ceiling in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        (self.max_file_size_mb * 1024.0 * 1024.0) as u64
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extract_tables: true,
            extract_nc_codes: true,
            max_file_size_mb: 30.0,
        }
    }
}
