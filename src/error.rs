//! Error types for the lexpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for lexpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading and parsing a document.
///
/// These only describe structural failures (unreadable or corrupt files).
/// Domain-level misses — a page without a text layer, a document without
/// recoverable metadata, zero NC codes — are not errors; they surface as
/// empty or absent fields on a successful extraction result.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with a PDF header.
    #[error("Not a PDF file: missing %PDF- header")]
    NotAPdf,

    /// The document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error parsing the PDF object structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error extracting text content from a page range.
    #[error("Text extraction error: {0}")]
    TextExtract(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::NotAPdf;
        assert!(err.to_string().contains("%PDF-"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
