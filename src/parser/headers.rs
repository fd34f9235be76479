use super::lines::char_len;
use super::CandidateSection;
use crate::domain::Domain;

pub const MIN_TITLE_CHARS: usize = 10;
pub const MAX_TITLE_CHARS: usize = 100;
const MAX_TITLE_PERIODS: usize = 3;
/// A colon is only allowed inside the last this-many characters.
const COLON_TAIL_CHARS: usize = 10;
const MIN_TITLE_WORDS: usize = 3;
const MAX_TITLE_WORDS: usize = 12;
const CONTEXT_LINES_BEFORE: usize = 2;
const CONTEXT_LINES_AFTER: usize = 20;

/// Every heading-like line of a page, each paired with its context window.
pub fn find_candidates(
    lines: &[&str],
    page_number: u32,
    document: &str,
    domain: Domain,
) -> Vec<CandidateSection> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_section_header(line, domain))
        .map(|(i, line)| CandidateSection {
            title: line.to_string(),
            document: document.to_string(),
            page_number,
            context: context_window(lines, i),
            line_position: i,
        })
        .collect()
}

pub fn is_section_header(line: &str, domain: Domain) -> bool {
    let len = char_len(line);
    if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&len) {
        return false;
    }

    if !line.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    if line.ends_with('.') || line.matches('.').count() > MAX_TITLE_PERIODS {
        return false;
    }

    // "Label: long explanatory sentence" is prose, not a heading
    if let Some(pos) = line.chars().position(|c| c == ':') {
        if pos + COLON_TAIL_CHARS < len {
            return false;
        }
    }

    let lower = line.to_lowercase();
    let has_keyword = domain.keywords().iter().any(|kw| lower.contains(kw));

    has_keyword || looks_like_title(line)
}

/// 3–12 words with at least half of them capitalised.
fn looks_like_title(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(MIN_TITLE_WORDS..=MAX_TITLE_WORDS).contains(&words.len()) {
        return false;
    }
    let capitalised = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    capitalised * 2 >= words.len()
}

fn context_window(lines: &[&str], i: usize) -> String {
    let start = i.saturating_sub(CONTEXT_LINES_BEFORE);
    let end = (i + CONTEXT_LINES_AFTER).min(lines.len());
    lines[start..end].join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn header(line: &str) -> bool {
        is_section_header(line, Domain::Travel)
    }

    #[test]
    fn title_with_domain_keywords() {
        assert!(header("Top 10 Coastal Adventures and Activities"));
    }

    #[test]
    fn sentence_ending_in_period_rejected() {
        assert!(!header("This is a regular paragraph of text that ends with a period."));
    }

    #[test]
    fn early_colon_rejected() {
        assert!(!header("Note: see appendix for full details and legal disclaimers"));
    }

    #[test]
    fn colon_in_tail_allowed() {
        // colon at char 19 of 29
        assert!(header("Day Trips from Nice: Overview"));
        // colon at char 9 of 26
        assert!(!header("Marseille: The Oldest City"));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        // exactly 10 chars, title-shaped
        assert!(is_section_header("Ab Cd Efgh", Domain::General));
        // 9 chars
        assert!(!is_section_header("Ab Cd Efg", Domain::General));

        let hundred = format!("Guide {}", "x".repeat(94));
        assert_eq!(char_len(&hundred), 100);
        assert!(header(&hundred));
        let over = format!("Guide {}", "x".repeat(95));
        assert!(!header(&over));
    }

    #[test]
    fn must_start_uppercase() {
        assert!(!header("coastal adventures for families"));
        assert!(!header("10 Coastal Adventures for Families"));
    }

    #[test]
    fn too_many_periods_rejected() {
        assert!(!header("A.B.C.D.E Coastal Guide"));
        assert!(header("A.B.C.D Coastal Guide"));
    }

    #[test]
    fn title_shape_without_keywords() {
        // 2 of 4 capitalised is exactly half
        assert!(is_section_header("Quiet Harbours near town", Domain::General));
        // 1 of 4
        assert!(!is_section_header("Quiet harbours near town", Domain::General));
        // too few words
        assert!(!is_section_header("Harbourmasters Association", Domain::General));
        // too many words
        assert!(!is_section_header(
            "One Two Three Four Five Six Seven Eight Nine Ten Eleven Twelve Thirteen",
            Domain::General
        ));
    }

    #[test]
    fn keyword_match_bypasses_title_shape() {
        // only one capitalised word of five, but contains "recipes"
        assert!(is_section_header("Easy recipes for busy weeknights", Domain::Food));
        assert!(!is_section_header("Easy recipes for busy weeknights", Domain::General));
    }

    #[test]
    fn context_window_bounds() {
        let lines: Vec<String> = (0..30).map(|i| format!("line{}", i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

        let ctx = context_window(&refs, 0);
        assert!(ctx.starts_with("line0 "));
        assert!(ctx.ends_with(" line19"));

        let ctx = context_window(&refs, 5);
        assert!(ctx.starts_with("line3 "));
        assert!(ctx.ends_with(" line24"));

        let ctx = context_window(&refs, 28);
        assert!(ctx.starts_with("line26 "));
        assert!(ctx.ends_with(" line29"));
    }

    #[test]
    fn candidates_in_line_order() {
        let lines = vec![
            "Top 10 Coastal Adventures and Activities",
            "short",
            "Packing Tips for Coastal Towns",
        ];
        let found = find_candidates(&lines, 3, "doc.pdf", Domain::Travel);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line_position, 0);
        assert_eq!(found[1].line_position, 2);
        assert_eq!(found[0].page_number, 3);
        assert_eq!(
            found[0].context,
            "Top 10 Coastal Adventures and Activities short Packing Tips for Coastal Towns"
        );
    }
}
