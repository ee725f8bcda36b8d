//! Extraction orchestration.
//!
//! One invocation covers one document and moves through a small state
//! machine: missing file or structural failure ends in an error result,
//! an oversized file ends in a deliberate skip, everything else in a
//! success result. The orchestrator never raises to its caller and
//! never returns partial content alongside an error.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::classifier;
use crate::error::Result;
use crate::model::{DocumentInfo, ExtractedContent, NcCode, PageContent, TableRecord};
use crate::nc_code::{confidence_score, context_window, detect_candidates, is_plausible};
use crate::parser::{ExtractOptions, PdfPages, TableDetector};

/// Context radius (bytes each side) for the plausibility check.
const WIDE_CONTEXT: usize = 200;

/// Context radius for the stored context and confidence scoring.
const NARROW_CONTEXT: usize = 50;

/// How many leading pages feed the metadata classifier.
const CLASSIFIER_PAGES: usize = 3;

/// Coordinates page extraction, the NC-code pipeline and metadata
/// classification for one document at a time.
///
/// Invocations share no mutable state; callers wanting concurrency run
/// one extraction per document in parallel and wrap their own time
/// budget around the call.
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor {
    options: ExtractOptions,
}

impl ContentExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract one document. Always returns a result object; callers
    /// branch on its `status` instead of catching errors.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> ExtractedContent {
        let path = path.as_ref();
        log::debug!("starting extraction: {}", path.display());

        if !path.is_file() {
            return ExtractedContent::failed(path, format!("file not found: {}", path.display()));
        }

        let file_size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => return ExtractedContent::failed(path, format!("cannot stat file: {}", e)),
        };

        if file_size > self.options.max_file_size_bytes() {
            let reason = format!(
                "file skipped: {:.1} MB exceeds the {:.1} MB limit",
                file_size as f64 / (1024.0 * 1024.0),
                self.options.max_file_size_mb
            );
            log::warn!("{}: {}", path.display(), reason);
            return ExtractedContent::skipped(path, reason, file_size);
        }

        match self.run(path, file_size) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("extraction failed for {}: {}", path.display(), e);
                ExtractedContent::failed(path, e.to_string())
            }
        }
    }

    fn run(&self, path: &Path, file_size: u64) -> Result<ExtractedContent> {
        let pdf = PdfPages::open(path)?;
        let page_count = pdf.page_count();

        let table_detector = self.options.extract_tables.then(TableDetector::new);
        let pages = pdf.extract_pages(table_detector.as_ref());

        let text = join_page_texts(&pages);

        let nc_codes = if self.options.extract_nc_codes {
            collect_nc_codes(&pages)
        } else {
            Vec::new()
        };

        let tables: Vec<TableRecord> = pages
            .iter()
            .flat_map(|page| page.tables.iter().cloned())
            .collect();

        let header_text = pages
            .iter()
            .take(CLASSIFIER_PAGES)
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let document_info = classifier::classify(&header_text);

        let metadata = build_metadata(file_size, page_count, &tables, &nc_codes, &document_info);

        log::debug!(
            "extraction finished: {} pages, {} table(s), {} NC code(s)",
            page_count,
            tables.len(),
            nc_codes.len()
        );

        Ok(ExtractedContent::success(
            path,
            text,
            nc_codes,
            tables,
            metadata,
            page_count,
            document_info,
        ))
    }
}

/// Concatenate page texts with page-break markers.
fn join_page_texts(pages: &[PageContent]) -> String {
    let mut text = String::new();
    for page in pages {
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&format!("--- Page {} ---\n", page.number));
        text.push_str(&page.text);
    }
    text
}

/// Run the NC-code pipeline over every page and deduplicate across the
/// document: the first accepted occurrence of a normalized code (page
/// order, then position order) wins; later duplicates are discarded.
fn collect_nc_codes(pages: &[PageContent]) -> Vec<NcCode> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut accepted = Vec::new();

    for page in pages {
        for candidate in detect_candidates(page.number, &page.text) {
            if seen.contains(&candidate.code) {
                continue;
            }

            let wide = context_window(&page.text, candidate.start, candidate.end, WIDE_CONTEXT);
            if !is_plausible(&candidate.code, &candidate.raw, &wide) {
                continue;
            }

            let narrow = context_window(&page.text, candidate.start, candidate.end, NARROW_CONTEXT);
            let confidence = confidence_score(&candidate.code, &narrow);
            seen.insert(candidate.code.clone());
            accepted.push(NcCode::new(candidate.code, page.number, narrow, confidence));
        }
    }

    accepted
}

/// Assemble the metadata map: counters, file size and the flattened
/// document info fields for convenience.
fn build_metadata(
    file_size: u64,
    page_count: u32,
    tables: &[TableRecord],
    nc_codes: &[NcCode],
    info: &DocumentInfo,
) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("file_size_bytes".to_string(), Value::from(file_size));
    metadata.insert("pages".to_string(), Value::from(page_count));
    metadata.insert("tables_found".to_string(), Value::from(tables.len()));
    metadata.insert("nc_codes_found".to_string(), Value::from(nc_codes.len()));

    if let Some(ref number) = info.document_number {
        metadata.insert("document_number".to_string(), Value::from(number.clone()));
    }
    if let Some(ref celex) = info.celex_number {
        metadata.insert("celex_number".to_string(), Value::from(celex.clone()));
    }
    if let Some(doc_type) = info.document_type {
        metadata.insert("document_type".to_string(), Value::from(doc_type.to_string()));
    }
    if let Some(subtype) = info.document_subtype {
        metadata.insert(
            "document_subtype".to_string(),
            Value::from(subtype.to_string()),
        );
    }
    if let Some(body) = info.issuing_body {
        metadata.insert("issuing_body".to_string(), Value::from(body.to_string()));
    }
    if let Some(date) = info.publication_date {
        metadata.insert(
            "publication_date".to_string(),
            Value::from(date.format("%Y-%m-%d").to_string()),
        );
    }
    if let Some(ref series) = info.publication_series {
        metadata.insert(
            "publication_series".to_string(),
            Value::from(series.clone()),
        );
    }
    if let Some(ref title) = info.full_title {
        metadata.insert("full_title".to_string(), Value::from(title.clone()));
    }

    metadata
}
