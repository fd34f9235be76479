pub mod headers;
pub mod lines;

use std::collections::BTreeMap;

use crate::domain::Domain;

/// A heading-like line plus the window of lines around it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSection {
    pub title: String,
    pub document: String,
    pub page_number: u32,
    pub context: String,
    pub line_position: usize,
}

/// Two-pass page scan: raw text → lines → candidate sections.
pub fn detect_page(text: &str, page_number: u32, document: &str, domain: Domain) -> Vec<CandidateSection> {
    let lines = lines::split_lines(text);
    headers::find_candidates(&lines, page_number, document, domain)
}

/// Candidates of every page of one document, pages ascending.
pub fn detect_document(
    document: &str,
    pages: &BTreeMap<u32, String>,
    domain: Domain,
) -> Vec<CandidateSection> {
    pages
        .iter()
        .flat_map(|(&page, text)| detect_page(text, page, document, domain))
        .collect()
}

// ── Tests ──
