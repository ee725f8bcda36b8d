//! Candidate detection for customs nomenclature codes.
//!
//! NC codes share their numeric shape with years, page numbers and
//! article references, so this stage is deliberately permissive: it
//! emits every substring matching one of the code shapes and leaves
//! acceptance to the plausibility filter.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Code shapes in order from most to least specific. Every shape is
/// tried independently against the full page text; spans claimed by an
/// earlier shape suppress overlapping matches of later ones.
static SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d{4}\.\d{2}\.\d{2}\.\d{2}",
        r"\d{4}\.\d{2}\.\d{2}",
        r"\d{4}\.\d{2}",
        r"\d{4} \d{2} \d{2}",
        r"\d{4} \d{2}",
        r"\d{8}",
        r"\d{6}",
        r"\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("NC shape regex"))
    .collect()
});

/// One structural match, before plausibility filtering.
#[derive(Debug, Clone)]
pub struct NcCandidate {
    /// Normalized code: spaces stripped, dots kept
    pub code: String,

    /// Page the match was found on (1-indexed)
    pub page: u32,

    /// Byte span of the raw match within the page text
    pub start: usize,
    pub end: usize,

    /// The raw matched text, separators included
    pub raw: String,
}

/// Detect every NC-code candidate in one page's text.
///
/// Candidates are deduplicated by normalized code within the page and
/// returned in position order. The `regex` crate has no lookaround, so
/// digit boundaries are enforced by inspecting the bytes adjacent to
/// each match.
pub fn detect_candidates(page: u32, text: &str) -> Vec<NcCandidate> {
    let mut candidates: Vec<NcCandidate> = Vec::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for shape in SHAPES.iter() {
        for m in shape.find_iter(text) {
            let (start, end) = (m.start(), m.end());
            if !digit_bounded(text, start, end) {
                continue;
            }
            if claimed.iter().any(|&(s, e)| start < e && end > s) {
                continue;
            }
            claimed.push((start, end));

            let code = normalize(m.as_str());
            if !seen.insert(code.clone()) {
                continue;
            }
            candidates.push(NcCandidate {
                code,
                page,
                start,
                end,
                raw: m.as_str().to_string(),
            });
        }
    }

    candidates.sort_by_key(|c| c.start);
    log::debug!(
        "page {}: {} NC-code candidate(s) detected",
        page,
        candidates.len()
    );
    candidates
}

/// Normalize a raw match: strip spaces, keep dot separators.
pub fn normalize(raw: &str) -> String {
    raw.replace(' ', "")
}

/// Cut a context window of `radius` bytes either side of a match span,
/// snapped to char boundaries, with newlines flattened to single spaces.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut from = start.saturating_sub(radius);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = usize::min(end + radius, text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    text[from..to]
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// True when the match is not embedded in a longer digit run.
fn digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_digit();
    let after_ok = end >= bytes.len() || !bytes[end].is_ascii_digit();
    before_ok && after_ok
}
