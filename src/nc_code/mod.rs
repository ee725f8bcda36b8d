//! Customs nomenclature code detection pipeline.
//!
//! Two stages: a permissive shape detector over page text, then a pure
//! plausibility filter that separates genuine codes from years, page
//! numbers and article references.

mod detector;
mod filter;

pub use detector::{context_window, detect_candidates, normalize, NcCandidate};
pub use filter::{confidence_score, digit_count, is_plausible, CITATION_TERMS, CUSTOMS_KEYWORDS};
