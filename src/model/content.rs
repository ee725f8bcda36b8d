//! The aggregate output of one extraction run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use super::{DocumentInfo, NcCode, TableRecord};

/// Terminal state of an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Extraction completed; fields may still be empty (soft misses).
    Success,
    /// A structural failure prevented extraction.
    Error,
    /// The file was deliberately not processed (e.g. over the size limit).
    Skipped,
}

/// The full output of one extraction run.
///
/// Constructed once per invocation and immutable after return. Callers
/// branch on `status` rather than catching errors: a failed run carries
/// its reason in `error` and empty text/tables/codes, never partial
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Path of the source file
    pub source_path: String,

    /// Concatenated full text, page breaks marked
    pub text: String,

    /// Accepted NC codes, deduplicated across the whole document
    pub nc_codes: Vec<NcCode>,

    /// Tables from all pages, in page order
    pub tables: Vec<TableRecord>,

    /// Counters, file size, and flattened document info for convenience
    pub metadata: Map<String, Value>,

    /// True page count of the document
    pub page_count: u32,

    /// Terminal state of the run
    pub status: ExtractionStatus,

    /// Failure or skip reason, when status is not success
    pub error: Option<String>,

    /// Inferred provenance metadata
    pub document_info: DocumentInfo,
}

impl ExtractedContent {
    /// Build a successful result.
    #[allow(clippy::too_many_arguments)]
    pub fn success(
        source_path: &Path,
        text: String,
        nc_codes: Vec<NcCode>,
        tables: Vec<TableRecord>,
        metadata: Map<String, Value>,
        page_count: u32,
        document_info: DocumentInfo,
    ) -> Self {
        Self {
            source_path: source_path.display().to_string(),
            text,
            nc_codes,
            tables,
            metadata,
            page_count,
            status: ExtractionStatus::Success,
            error: None,
            document_info,
        }
    }

    /// Build a failed result: reason captured, no partial content.
    pub fn failed(source_path: &Path, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            source_path: source_path.display().to_string(),
            text: String::new(),
            nc_codes: Vec::new(),
            tables: Vec::new(),
            metadata: Map::new(),
            page_count: 0,
            status: ExtractionStatus::Error,
            error: Some(reason),
            document_info: DocumentInfo::default(),
        }
    }

    /// Build a skipped result. The explanatory reason doubles as the
    /// text payload so downstream consumers see why nothing was extracted.
    pub fn skipped(source_path: &Path, reason: impl Into<String>, file_size: u64) -> Self {
        let reason = reason.into();
        let mut metadata = Map::new();
        metadata.insert("file_size_bytes".to_string(), Value::from(file_size));
        Self {
            source_path: source_path.display().to_string(),
            text: reason.clone(),
            nc_codes: Vec::new(),
            tables: Vec::new(),
            metadata,
            page_count: 0,
            status: ExtractionStatus::Skipped,
            error: Some(reason),
            document_info: DocumentInfo::default(),
        }
    }

    /// Check whether the run completed.
    pub fn is_success(&self) -> bool {
        self.status == ExtractionStatus::Success
    }

    /// Serialize the result to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
