//! Plausibility filtering and confidence scoring for NC-code candidates.
//!
//! Pure functions from (candidate, context) to a verdict, kept free of
//! page-iteration state so the acceptance logic is testable in
//! isolation. The rule order is fixed: customs-domain keywords accept
//! before legislative-citation terms reject.

/// Customs/tariff-domain terms whose presence in context accepts a
/// candidate. Checked case-insensitively by substring.
pub const CUSTOMS_KEYWORDS: &[&str] = &[
    "combined nomenclature",
    "nomenclature",
    "tariff",
    "subheading",
    "heading",
    "chapter",
    "hs code",
    "customs",
    "taric",
    "classified under",
    "annex i",
    "annex ii",
    "listed in annex",
    "goods",
];

/// Legislative-citation terms whose presence rejects a candidate that
/// no customs keyword already accepted.
pub const CITATION_TERMS: &[&str] = &[
    "regulation (eu)",
    "regulation (eec)",
    "directive",
    "article",
    "paragraph",
    "dated",
    "year",
    "published",
    "official journal",
    "oj l",
];

/// Calendar years masquerading as codes are rejected outright.
const YEAR_RANGE: std::ops::RangeInclusive<u64> = 1900..=2100;

/// Decide whether a candidate is a plausible NC code.
///
/// `code` is the normalized form, `raw` the matched text with its
/// original separators, `context` the ±200-character window around the
/// match. First decisive rule wins:
///
/// 1. reject codes with fewer than 4 digits;
/// 2. reject purely numeric values in the calendar-year range;
/// 3. accept on any customs-domain keyword in context;
/// 4. reject on any legislative-citation term in context;
/// 5. reject on "page" or "article" in context;
/// 6. accept separator-formatted codes (dot or space grouping);
/// 7. accept codes with 8 or more digits;
/// 8. otherwise reject.
pub fn is_plausible(code: &str, raw: &str, context: &str) -> bool {
    if digit_count(code) < 4 {
        return false;
    }

    if let Ok(value) = code.parse::<u64>() {
        if YEAR_RANGE.contains(&value) {
            return false;
        }
    }

    let context = context.to_lowercase();
    if CUSTOMS_KEYWORDS.iter().any(|k| context.contains(k)) {
        return true;
    }
    if CITATION_TERMS.iter().any(|t| context.contains(t)) {
        return false;
    }
    if context.contains("page") || context.contains("article") {
        return false;
    }

    if raw.contains('.') || raw.contains(' ') {
        return true;
    }
    if digit_count(code) >= 8 {
        return true;
    }

    false
}

/// Compute the confidence score for an accepted code.
///
/// Starts at 0.5; digit count adds 0.3 (≥8), 0.2 (≥6) or 0.1 (≥4);
/// each distinct customs keyword in the short context window adds 0.1,
/// capped at 0.2. The result is clamped to [0.0, 1.0]. Always computed
/// from the final normalized code and its context, never copied from a
/// duplicate occurrence.
pub fn confidence_score(code: &str, context: &str) -> f64 {
    let digits = digit_count(code);
    let mut score = 0.5;

    score += if digits >= 8 {
        0.3
    } else if digits >= 6 {
        0.2
    } else if digits >= 4 {
        0.1
    } else {
        0.0
    };

    let context = context.to_lowercase();
    let keyword_hits = CUSTOMS_KEYWORDS
        .iter()
        .filter(|k| context.contains(*k))
        .count();
    score += 0.1 * keyword_hits.min(2) as f64;

    score.clamp(0.0, 1.0)
}

/// Number of digits in a normalized code.
pub fn digit_count(code: &str) -> usize {
    code.chars().filter(char::is_ascii_digit).count()
}
