//! PDF page and table extraction.

mod options;
mod pdf;
mod tables;

pub use options::ExtractOptions;
pub use pdf::PdfPages;
pub use tables::{TableDetector, TableDetectorConfig};
