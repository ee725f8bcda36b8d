//! Document provenance classification from header text.
//!
//! EU legislative documents carry no machine-readable metadata; the
//! type, number, date and issuing body are inferred from the loosely
//! templated header text of the first pages. Every sub-step is
//! independently optional — a missing match leaves the field unset,
//! it is never guessed.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::{DocumentInfo, DocumentSubtype, DocumentType, IssuingBody};

/// Date following an Official Journal running header such as
/// "L 228/94 EN Official Journal of the European Union 15.9.2023".
static HEADER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"L\s+\d{1,4}/\d{1,4}(?s:.{0,120}?)(\d{1,2}\.\d{1,2}\.\d{4})")
        .expect("HEADER_DATE regex")
});

/// Bare DD.MM.YYYY token bounded by whitespace.
static BARE_DOTTED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(\d{2}\.\d{2}\.\d{4})(?:\s|$)").expect("BARE_DOTTED_DATE regex")
});

/// Bare DD/MM/YYYY token bounded by whitespace.
static BARE_SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(\d{2}/\d{2}/\d{4})(?:\s|$)").expect("BARE_SLASH_DATE regex")
});

/// "L YYYY/NNN" running header. The 4-digit year-shaped prefix keeps
/// page-style headers like "L 228/94" out of the document number.
static NUMBER_L_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bL\s+(\d{4}/\d{3,5})\b").expect("NUMBER_L_HEADER regex"));

/// "(EU) YYYY/NNN" within a title.
static NUMBER_EU_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(EU\)\s+(?:No\s+)?(\d{4}/\d{3,5})\b").expect("NUMBER_EU_TITLE regex")
});

/// Any bare YYYY/NNN token.
static NUMBER_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4}/\d{3,5})\b").expect("NUMBER_GENERIC regex"));

/// "Official Journal … L series" / "… C series".
static SERIES_OJ: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)official\s+journal(?s:.{0,80}?)\b([LC])\s+series").expect("SERIES_OJ regex")
});

/// Bare "L ddd/" or "C ddd/" token.
static SERIES_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([LC])\s+\d{1,4}/").expect("SERIES_TOKEN regex"));

/// Title patterns, most to least specific. The matched span is kept
/// verbatim as the full title.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)COMMISSION\s+IMPLEMENTING\s+REGULATION\s+\(EU\)\s+(?:No\s+)?\d{4}/\d{1,5}",
        r"(?i)COMMISSION\s+DELEGATED\s+REGULATION\s+\(EU\)\s+(?:No\s+)?\d{4}/\d{1,5}",
        r"(?i)REGULATION\s+\(EU\)\s+(?:No\s+)?\d{4}/\d{1,5}\s+OF\s+THE\s+EUROPEAN\s+PARLIAMENT\s+AND\s+OF\s+THE\s+COUNCIL",
        r"(?i)COMMISSION\s+REGULATION\s+\((?:EU|EC|EEC)\)\s+(?:No\s+)?\d{4}/\d{1,5}",
        r"(?i)(?:COMMISSION\s+)?DIRECTIVE\s+\((?:EU|EC|EEC)\)\s+\d{4}/\d{1,5}(?:\s+OF\s+THE\s+EUROPEAN\s+PARLIAMENT\s+AND\s+OF\s+THE\s+COUNCIL)?",
        r"(?i)(?:COMMISSION\s+)?(?:IMPLEMENTING\s+|DELEGATED\s+)?DECISION\s+\(EU\)\s+\d{4}/\d{1,5}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("title regex"))
    .collect()
});

/// Ordered classification rules: all listed substrings must appear
/// (case-insensitively) for a rule to fire; the first match wins.
/// New document-type rules are added here, not in control flow.
const TYPE_RULES: &[(
    &[&str],
    DocumentType,
    Option<DocumentSubtype>,
    IssuingBody,
)] = &[
    (
        &["implementing regulation"],
        DocumentType::Regulation,
        Some(DocumentSubtype::Implementing),
        IssuingBody::Commission,
    ),
    (
        &["delegated regulation"],
        DocumentType::Regulation,
        Some(DocumentSubtype::Delegated),
        IssuingBody::Commission,
    ),
    (
        &["regulation", "european parliament", "council"],
        DocumentType::Regulation,
        None,
        IssuingBody::ParliamentCouncil,
    ),
    (
        &["commission regulation"],
        DocumentType::Regulation,
        None,
        IssuingBody::Commission,
    ),
    (
        &["directive", "european parliament"],
        DocumentType::Directive,
        None,
        IssuingBody::ParliamentCouncil,
    ),
    (
        &["commission directive"],
        DocumentType::Directive,
        None,
        IssuingBody::Commission,
    ),
    (
        &["commission decision"],
        DocumentType::Decision,
        None,
        IssuingBody::Commission,
    ),
    (
        &["decision"],
        DocumentType::Decision,
        None,
        IssuingBody::ParliamentCouncil,
    ),
];

/// Infer document metadata from the concatenated text of the first
/// pages (callers pass the first three).
pub fn classify(text: &str) -> DocumentInfo {
    let mut info = DocumentInfo {
        publication_date: find_publication_date(text),
        document_number: find_document_number(text),
        publication_series: find_series(text),
        full_title: find_title(text),
        ..Default::default()
    };

    let lower = text.to_lowercase();
    if let Some(&(_, doc_type, subtype, body)) = TYPE_RULES
        .iter()
        .find(|(needles, ..)| needles.iter().all(|n| lower.contains(n)))
    {
        info.document_type = Some(doc_type);
        info.document_subtype = subtype;
        info.issuing_body = Some(body);
    }

    info.celex_number = synthesize_celex(info.document_number.as_deref(), info.document_type);

    log::debug!(
        "classified document: type={:?} number={:?} date={:?}",
        info.document_type,
        info.document_number,
        info.publication_date
    );
    info
}

/// Publication date: OJ running header first, then bare dotted and
/// slashed tokens. A match that fails to parse falls through to the
/// next pattern family.
fn find_publication_date(text: &str) -> Option<NaiveDate> {
    let families: &[(&Regex, &str)] = &[
        (&*HEADER_DATE, "%d.%m.%Y"),
        (&*BARE_DOTTED_DATE, "%d.%m.%Y"),
        (&*BARE_SLASH_DATE, "%d/%m/%Y"),
    ];

    for (pattern, format) in families {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(date) = NaiveDate::parse_from_str(&caps[1], format) {
                return Some(date);
            }
        }
    }
    None
}

/// Document number as "YYYY/NNN": L header, then "(EU)" title form,
/// then any bare token. First match wins.
fn find_document_number(text: &str) -> Option<String> {
    [&*NUMBER_L_HEADER, &*NUMBER_EU_TITLE, &*NUMBER_GENERIC]
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| caps[1].to_string())
}

/// Official Journal series letter.
fn find_series(text: &str) -> Option<String> {
    SERIES_OJ
        .captures(text)
        .or_else(|| SERIES_TOKEN.captures(text))
        .map(|caps| caps[1].to_uppercase())
}

/// The matched type-and-number header, verbatim.
fn find_title(text: &str) -> Option<String> {
    TITLE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

/// Synthesize a CELEX-like identifier: sector 3, year, type letter,
/// sequence zero-padded to four digits. Best-effort, not validated
/// against any registry; requires both number and type.
fn synthesize_celex(number: Option<&str>, doc_type: Option<DocumentType>) -> Option<String> {
    let (year, sequence) = number?.split_once('/')?;
    let letter = doc_type?.celex_letter();
    Some(format!("3{}{}{:0>4}", year, letter, sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_date_and_series() {
        let info = classify("L 228/94 EN Official Journal of the European Union 15.9.2023");
        assert_eq!(
            info.publication_date,
            NaiveDate::from_ymd_opt(2023, 9, 15)
        );
        assert_eq!(info.publication_series.as_deref(), Some("L"));
        // Page-style header numbers are not document numbers.
        assert_eq!(info.document_number, None);
        assert_eq!(info.celex_number, None);
    }

    #[test]
    fn test_bare_dotted_date() {
        let info = classify("Done at Brussels, 04.12.2024 for the Commission");
        assert_eq!(
            info.publication_date,
            NaiveDate::from_ymd_opt(2024, 12, 4)
        );
    }

    #[test]
    fn test_bare_slash_date_fallback() {
        let info = classify("adopted on 04/12/2024 by written procedure");
        assert_eq!(
            info.publication_date,
            NaiveDate::from_ymd_opt(2024, 12, 4)
        );
    }

    #[test]
    fn test_no_date() {
        let info = classify("no recognizable date token in here");
        assert_eq!(info.publication_date, None);
    }

    #[test]
    fn test_implementing_regulation_scenario() {
        let info = classify("COMMISSION IMPLEMENTING REGULATION (EU) 2024/3210 of 12 December 2024");
        assert_eq!(info.document_type, Some(DocumentType::Regulation));
        assert_eq!(info.document_subtype, Some(DocumentSubtype::Implementing));
        assert_eq!(info.issuing_body, Some(IssuingBody::Commission));
        assert_eq!(info.document_number.as_deref(), Some("2024/3210"));
        assert_eq!(info.celex_number.as_deref(), Some("32024R3210"));
        assert_eq!(
            info.full_title.as_deref(),
            Some("COMMISSION IMPLEMENTING REGULATION (EU) 2024/3210")
        );
    }

    #[test]
    fn test_delegated_regulation() {
        let info = classify("COMMISSION DELEGATED REGULATION (EU) 2023/112");
        assert_eq!(info.document_type, Some(DocumentType::Regulation));
        assert_eq!(info.document_subtype, Some(DocumentSubtype::Delegated));
        assert_eq!(info.issuing_body, Some(IssuingBody::Commission));
        // Sequence is zero-padded to four digits.
        assert_eq!(info.celex_number.as_deref(), Some("32023R0112"));
    }

    #[test]
    fn test_parliament_council_regulation() {
        let info = classify(
            "REGULATION (EU) 2024/1689 OF THE EUROPEAN PARLIAMENT AND OF THE COUNCIL",
        );
        assert_eq!(info.document_type, Some(DocumentType::Regulation));
        assert_eq!(info.document_subtype, None);
        assert_eq!(info.issuing_body, Some(IssuingBody::ParliamentCouncil));
        assert_eq!(info.celex_number.as_deref(), Some("32024R1689"));
        assert!(info
            .full_title
            .as_deref()
            .unwrap()
            .ends_with("OF THE EUROPEAN PARLIAMENT AND OF THE COUNCIL"));
    }

    #[test]
    fn test_commission_directive() {
        let info = classify("COMMISSION DIRECTIVE (EU) 2023/2413 amending earlier acts");
        assert_eq!(info.document_type, Some(DocumentType::Directive));
        assert_eq!(info.issuing_body, Some(IssuingBody::Commission));
        assert_eq!(info.celex_number.as_deref(), Some("32023L2413"));
    }

    #[test]
    fn test_parliament_directive() {
        let info = classify(
            "DIRECTIVE (EU) 2022/2464 OF THE EUROPEAN PARLIAMENT AND OF THE COUNCIL",
        );
        assert_eq!(info.document_type, Some(DocumentType::Directive));
        assert_eq!(info.issuing_body, Some(IssuingBody::ParliamentCouncil));
    }

    #[test]
    fn test_decision_issuer_depends_on_commission_prefix() {
        let info = classify("COMMISSION DECISION (EU) 2024/500 on state aid");
        assert_eq!(info.document_type, Some(DocumentType::Decision));
        assert_eq!(info.issuing_body, Some(IssuingBody::Commission));
        assert_eq!(info.celex_number.as_deref(), Some("32024D0500"));

        let info = classify("DECISION (EU) 2024/600 establishing a programme");
        assert_eq!(info.document_type, Some(DocumentType::Decision));
        assert_eq!(info.issuing_body, Some(IssuingBody::ParliamentCouncil));
    }

    #[test]
    fn test_unclassified_text_leaves_fields_unset() {
        let info = classify("An ordinary paragraph about trade policy.");
        assert_eq!(info.document_type, None);
        assert_eq!(info.document_subtype, None);
        assert_eq!(info.issuing_body, None);
        assert_eq!(info.full_title, None);
    }

    #[test]
    fn test_celex_requires_both_number_and_type() {
        assert_eq!(synthesize_celex(Some("2024/3210"), None), None);
        assert_eq!(synthesize_celex(None, Some(DocumentType::Regulation)), None);
        assert_eq!(
            synthesize_celex(Some("2024/3210"), Some(DocumentType::Regulation)).as_deref(),
            Some("32024R3210")
        );
    }

    #[test]
    fn test_series_from_oj_phrase() {
        let info = classify("published in the Official Journal of the European Union, C series");
        assert_eq!(info.publication_series.as_deref(), Some("C"));
    }

    #[test]
    fn test_number_from_l_header() {
        let info = classify("OJ L 2024/1689 header form");
        assert_eq!(info.document_number.as_deref(), Some("2024/1689"));
    }
}
