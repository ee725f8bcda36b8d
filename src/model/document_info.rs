//! Document provenance metadata types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The legal instrument type of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Regulation,
    Directive,
    Decision,
}

impl DocumentType {
    /// Sector letter used when synthesizing a CELEX-like identifier.
    pub fn celex_letter(self) -> char {
        match self {
            DocumentType::Regulation => 'R',
            DocumentType::Directive => 'L',
            DocumentType::Decision => 'D',
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentType::Regulation => "REGULATION",
            DocumentType::Directive => "DIRECTIVE",
            DocumentType::Decision => "DECISION",
        };
        f.write_str(s)
    }
}

/// The subtype of a Commission act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentSubtype {
    Implementing,
    Delegated,
}

impl fmt::Display for DocumentSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentSubtype::Implementing => "IMPLEMENTING",
            DocumentSubtype::Delegated => "DELEGATED",
        };
        f.write_str(s)
    }
}

/// The EU institution that promulgated the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuingBody {
    Commission,
    ParliamentCouncil,
}

impl fmt::Display for IssuingBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssuingBody::Commission => "COMMISSION",
            IssuingBody::ParliamentCouncil => "PARLIAMENT_COUNCIL",
        };
        f.write_str(s)
    }
}

/// Provenance metadata inferred from the first pages of a document.
///
/// Every field is independently optional — a missing match leaves the
/// field unset, it is never guessed. The only coupling: `celex_number`
/// is synthesized only when both `document_number` and `document_type`
/// are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Official number in "YYYY/NNN" form
    pub document_number: Option<String>,

    /// Synthesized CELEX-like identifier, e.g. "32024R3210".
    /// Best-effort; not validated against any registry.
    pub celex_number: Option<String>,

    /// Instrument type
    pub document_type: Option<DocumentType>,

    /// Commission act subtype
    pub document_subtype: Option<DocumentSubtype>,

    /// Issuing institution
    pub issuing_body: Option<IssuingBody>,

    /// Date of publication in the Official Journal
    pub publication_date: Option<NaiveDate>,

    /// Official Journal series letter, typically "L" or "C"
    pub publication_series: Option<String>,

    /// The matched type-and-number header string, verbatim
    pub full_title: Option<String>,
}

impl DocumentInfo {
    /// Check whether no field was recovered at all.
    pub fn is_empty(&self) -> bool {
        self == &DocumentInfo::default()
    }
}
