//! Page text extraction backed by lopdf.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lopdf::Document;

use crate::error::{Error, Result};
use crate::model::PageContent;

use super::tables::TableDetector;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Page-oriented view of a loaded PDF document.
///
/// Opening raises only on unreadable or corrupt files; per-page text
/// failures are soft (an empty string, logged) so a single bad page
/// never aborts the run.
pub struct PdfPages {
    doc: Document,
}

impl PdfPages {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_pdf_magic(path)?;

        let doc = Document::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !data.starts_with(PDF_MAGIC) {
            return Err(Error::NotAPdf);
        }
        let doc = Document::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    fn from_document(doc: Document) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// The true number of pages, including pages without a text layer.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract text for one page (1-indexed).
    pub fn page_text(&self, number: u32) -> Result<String> {
        self.doc
            .extract_text(&[number])
            .map_err(|e| Error::TextExtract(format!("page {}: {}", number, e)))
    }

    /// Extract every page, in page order, 1-indexed.
    ///
    /// A page with no recoverable text yields an empty string and still
    /// appears in the output. When a [`TableDetector`] is given, tables
    /// are detected from each page's text.
    pub fn extract_pages(&self, tables: Option<&TableDetector>) -> Vec<PageContent> {
        let page_ids = self.doc.get_pages();
        let mut pages = Vec::with_capacity(page_ids.len());

        for (number, _) in page_ids {
            let text = match self.page_text(number) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("no text recovered from page {}: {}", number, e);
                    String::new()
                }
            };

            let mut page = PageContent::new(number, text);
            if let Some(detector) = tables {
                for table in detector.detect(number, &page.text) {
                    page.add_table(table);
                }
            }
            pages.push(page);
        }

        pages
    }
}

/// Verify the file starts with the PDF header.
fn check_pdf_magic(path: &Path) -> Result<()> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 5];
    if file.read_exact(&mut header).is_err() || &header[..] != PDF_MAGIC {
        return Err(Error::NotAPdf);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_non_pdf() {
        let result = PdfPages::from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::NotAPdf)));
    }

    #[test]
    fn test_from_bytes_rejects_truncated_pdf() {
        // Valid magic but no object structure behind it
        let result = PdfPages::from_bytes(b"%PDF-1.7\n");
        assert!(result.is_err());
        assert!(!matches!(result, Err(Error::NotAPdf)));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let result = PdfPages::open("/nonexistent/path/doc.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
