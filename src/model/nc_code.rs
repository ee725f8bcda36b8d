//! Customs nomenclature code types.

use serde::{Deserialize, Serialize};

/// One accepted occurrence of a customs nomenclature (NC) code.
///
/// The code string is normalized: internal spaces are stripped, dot
/// separators are kept. Within one extraction run no two entries share
/// the same normalized code; the first occurrence (page order, then
/// position order) wins for page and context attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NcCode {
    /// Normalized code string, e.g. "4002.19" or "40021910"
    pub code: String,

    /// Page the code was found on (1-indexed)
    pub page: u32,

    /// Surrounding text, ±50 characters with newlines flattened to spaces
    pub context: String,

    /// Heuristic plausibility score in [0.0, 1.0]
    pub confidence: f64,
}

impl NcCode {
    /// Create a new code occurrence.
    pub fn new(
        code: impl Into<String>,
        page: u32,
        context: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            code: code.into(),
            page,
            context: context.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Number of digits in the code, ignoring separators.
    pub fn digit_count(&self) -> usize {
        self.code.chars().filter(char::is_ascii_digit).count()
    }

    /// The HS chapter: first two digits of the code.
    pub fn chapter(&self) -> Option<&str> {
        let digits_start = self.code.find(|c: char| c.is_ascii_digit())?;
        self.code.get(digits_start..digits_start + 2)
    }

    /// The HS heading: first four digits of the code.
    pub fn heading(&self) -> Option<&str> {
        if self.digit_count() < 4 {
            return None;
        }
        self.code.get(0..4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_ignores_separators() {
        let code = NcCode::new("4002.19.10", 1, "", 0.8);
        assert_eq!(code.digit_count(), 8);
    }

    #[test]
    fn test_chapter_and_heading() {
        let code = NcCode::new("4002.19", 1, "", 0.7);
        assert_eq!(code.chapter(), Some("40"));
        assert_eq!(code.heading(), Some("4002"));
    }

    #[test]
    fn test_confidence_is_clamped() {
        let code = NcCode::new("40021910", 1, "", 1.7);
        assert_eq!(code.confidence, 1.0);
        let code = NcCode::new("40021910", 1, "", -0.2);
        assert_eq!(code.confidence, 0.0);
    }
}
