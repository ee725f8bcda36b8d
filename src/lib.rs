//! # lexpdf
//!
//! Content extraction for EU legislative PDF documents (regulations,
//! directives, decisions).
//!
//! None of the information this library recovers is delivered in a
//! consistent machine-readable form: customs nomenclature (NC) codes
//! share their numeric shape with years, page numbers and article
//! references, and document metadata must be inferred from loosely
//! templated header text. One extraction run recovers:
//!
//! - **Page text and tables**: every page in order, 1-indexed; pages
//!   without a text layer still count toward the page total.
//! - **NC codes**: shape-based candidate detection followed by a
//!   contextual plausibility filter, deduplication and a confidence
//!   score in [0.0, 1.0].
//! - **Document metadata**: type, subtype, issuing body, publication
//!   date and series, official number and a synthesized CELEX-like
//!   identifier.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexpdf::extract_file;
//!
//! let content = extract_file("regulation.pdf");
//! if content.is_success() {
//!     for code in &content.nc_codes {
//!         println!("{} (page {}, confidence {:.2})", code.code, code.page, code.confidence);
//!     }
//! } else {
//!     eprintln!("extraction failed: {:?}", content.error);
//! }
//! ```
//!
//! Extraction never panics and never returns an `Err` to the caller:
//! every invocation yields an [`ExtractedContent`] whose `status` field
//! distinguishes success, structural failure and deliberate skips
//! (oversized files). Domain-level misses — no date found, zero codes —
//! are empty fields on a successful result, not errors.

pub mod classifier;
pub mod error;
pub mod extract;
pub mod model;
pub mod nc_code;
pub mod parser;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::ContentExtractor;
pub use model::{
    DocumentInfo, DocumentSubtype, DocumentType, ExtractedContent, ExtractionStatus, IssuingBody,
    NcCode, PageContent, TableRecord,
};
pub use parser::{ExtractOptions, PdfPages, TableDetector, TableDetectorConfig};

use std::path::Path;

/// Extract one document with default options.
///
/// # Example
///
/// ```no_run
/// use lexpdf::extract_file;
///
/// let content = extract_file("document.pdf");
/// println!("{} pages, {} NC codes", content.page_count, content.nc_codes.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> ExtractedContent {
    ContentExtractor::new().extract(path)
}

/// Extract one document with custom options.
///
/// # Example
///
/// ```no_run
/// use lexpdf::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new()
///     .with_tables(false)
///     .with_max_file_size_mb(10.0);
/// let content = extract_file_with_options("document.pdf", options);
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> ExtractedContent {
    ContentExtractor::with_options(options).extract(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_missing_file_returns_error_status() {
        let content = extract_file("/no/such/file.pdf");
        assert_eq!(content.status, ExtractionStatus::Error);
        assert!(!content.is_success());
    }

    #[test]
    fn test_options_are_threaded_through() {
        let extractor = ContentExtractor::with_options(
            ExtractOptions::new().with_nc_codes(false).with_tables(false),
        );
        assert!(!extractor.options().extract_nc_codes);
        assert!(!extractor.options().extract_tables);
    }
}
