use crate::domain::Domain;
use crate::parser::lines::char_len;
use crate::parser::CandidateSection;

pub const DOMAIN_KEYWORD_WEIGHT: f64 = 5.0;
pub const TASK_WORD_WEIGHT: f64 = 8.0;
pub const INFORMATIVE_TITLE_WEIGHT: f64 = 15.0;
pub const DOMAIN_BONUS_WEIGHT: f64 = 12.0;
pub const LONG_CONTEXT_WEIGHT: f64 = 10.0;
pub const VERY_LONG_CONTEXT_WEIGHT: f64 = 5.0;
pub const EARLY_PAGE_WEIGHT: f64 = 8.0;

/// Task words must be longer than this to count.
pub const MIN_TASK_WORD_CHARS: usize = 3;
pub const LONG_CONTEXT_CHARS: usize = 200;
pub const VERY_LONG_CONTEXT_CHARS: usize = 500;
pub const EARLY_PAGE_LIMIT: u32 = 3;

pub const INFORMATIVE_WORDS: &[&str] = &[
    "guide",
    "tips",
    "how to",
    "instructions",
    "comprehensive",
    "ultimate",
    "complete",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSection {
    pub section: CandidateSection,
    pub score: f64,
}

/// Additive relevance of one candidate. Every term is non-negative, so more
/// keyword hits can never lower a score.
pub fn relevance(section: &CandidateSection, domain: Domain, task: &str) -> f64 {
    let haystack = format!("{} {}", section.title, section.context).to_lowercase();
    let title = section.title.to_lowercase();
    let context_len = char_len(&section.context);

    let keyword_hits: usize = domain
        .keywords()
        .iter()
        .map(|kw| haystack.matches(kw).count())
        .sum();

    let task_hits = task
        .split_whitespace()
        .filter(|w| char_len(w) > MIN_TASK_WORD_CHARS)
        .map(str::to_lowercase)
        .filter(|w| haystack.contains(w.as_str()))
        .count();

    let informative_hits = INFORMATIVE_WORDS.iter().filter(|w| title.contains(*w)).count();
    let bonus_hits = domain
        .bonus_keywords()
        .iter()
        .filter(|w| title.contains(*w))
        .count();

    let mut score = 0.0;
    score += keyword_hits as f64 * DOMAIN_KEYWORD_WEIGHT;
    score += task_hits as f64 * TASK_WORD_WEIGHT;
    score += informative_hits as f64 * INFORMATIVE_TITLE_WEIGHT;
    score += bonus_hits as f64 * DOMAIN_BONUS_WEIGHT;
    if context_len > LONG_CONTEXT_CHARS {
        score += LONG_CONTEXT_WEIGHT;
    }
    if context_len > VERY_LONG_CONTEXT_CHARS {
        score += VERY_LONG_CONTEXT_WEIGHT;
    }
    if section.page_number <= EARLY_PAGE_LIMIT {
        score += EARLY_PAGE_WEIGHT;
    }
    score
}

pub fn score_all(sections: Vec<CandidateSection>, domain: Domain, task: &str) -> Vec<ScoredSection> {
    sections
        .into_iter()
        .map(|section| {
            let score = relevance(&section, domain, task);
            ScoredSection { section, score }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, context: &str, page_number: u32) -> CandidateSection {
        CandidateSection {
            title: title.to_string(),
            document: "doc.pdf".to_string(),
            page_number,
            context: context.to_string(),
            line_position: 0,
        }
    }

    #[test]
    fn travel_scenario() {
        let title = "Top 10 Coastal Adventures and Activities";
        let s = section(title, title, 1);
        let score = relevance(&s, Domain::Travel, "Plan a 5-day trip");

        // haystack is the title twice: "coastal", "adventures", "activities" twice each.
        // "do" never appears, nor do the task words.
        let keywords = 6.0 * DOMAIN_KEYWORD_WEIGHT;
        let bonus = 2.0 * DOMAIN_BONUS_WEIGHT; // adventures, activities
        assert_eq!(score, keywords + bonus + EARLY_PAGE_WEIGHT);
    }

    #[test]
    fn general_domain_only_structural_terms() {
        let s = section("Quiet Harbours Near Town", &"x".repeat(600), 7);
        let score = relevance(&s, Domain::General, "");
        assert_eq!(score, LONG_CONTEXT_WEIGHT + VERY_LONG_CONTEXT_WEIGHT);
    }

    #[test]
    fn context_length_thresholds_are_strict() {
        let at_200 = section("Quiet Harbours Near Town", &"x".repeat(200), 9);
        let at_201 = section("Quiet Harbours Near Town", &"x".repeat(201), 9);
        let at_500 = section("Quiet Harbours Near Town", &"x".repeat(500), 9);
        assert_eq!(relevance(&at_200, Domain::General, ""), 0.0);
        assert_eq!(relevance(&at_201, Domain::General, ""), LONG_CONTEXT_WEIGHT);
        assert_eq!(relevance(&at_500, Domain::General, ""), LONG_CONTEXT_WEIGHT);
    }

    #[test]
    fn early_page_bonus() {
        let p3 = section("Quiet Harbours Near Town", "", 3);
        let p4 = section("Quiet Harbours Near Town", "", 4);
        assert_eq!(relevance(&p3, Domain::General, ""), EARLY_PAGE_WEIGHT);
        assert_eq!(relevance(&p4, Domain::General, ""), 0.0);
    }

    #[test]
    fn task_words_count_once_each() {
        let s = section("Harbour Walks", "walking walking walking along the harbour", 9);
        // "walking" scores once despite three hits; "plan" misses; "the" is too short
        let score = relevance(&s, Domain::General, "Plan walking the harbour");
        assert_eq!(score, 2.0 * TASK_WORD_WEIGHT);
    }

    #[test]
    fn repeated_task_word_scores_per_repetition() {
        let s = section("Harbour Walks", "harbour", 9);
        assert_eq!(relevance(&s, Domain::General, "harbour"), TASK_WORD_WEIGHT);
        assert_eq!(relevance(&s, Domain::General, "harbour harbour"), 2.0 * TASK_WORD_WEIGHT);
    }

    #[test]
    fn task_words_matched_case_insensitively() {
        let s = section("Harbour Walks", "A walk by the HARBOUR", 9);
        assert_eq!(relevance(&s, Domain::General, "Harbour"), TASK_WORD_WEIGHT);
    }

    #[test]
    fn informative_and_bonus_only_look_at_title() {
        let in_title = section("Complete Recipe Guide", "", 9);
        let in_context = section("Kitchen Notes Here", "complete recipe guide", 9);

        let title_score = relevance(&in_title, Domain::Food, "");
        let context_score = relevance(&in_context, Domain::Food, "");

        // complete + guide informative; recipe bonus; no food keyword matches
        assert_eq!(title_score, 2.0 * INFORMATIVE_TITLE_WEIGHT + DOMAIN_BONUS_WEIGHT);
        assert_eq!(context_score, 0.0);
    }

    #[test]
    fn keyword_occurrences_are_additive() {
        let once = section("Menu Planning Notes", "", 9);
        let twice = section("Menu Planning Notes", "menu", 9);
        let a = relevance(&once, Domain::Food, "");
        let b = relevance(&twice, Domain::Food, "");
        assert_eq!(b - a, DOMAIN_KEYWORD_WEIGHT);
    }

    #[test]
    fn never_negative_and_deterministic() {
        let s = section("Anything At All", "", 100);
        for domain in [Domain::Travel, Domain::Hr, Domain::Food, Domain::General] {
            let a = relevance(&s, domain, "some task text");
            assert!(a >= 0.0);
            assert_eq!(a, relevance(&s, domain, "some task text"));
        }
    }

    #[test]
    fn score_all_keeps_order() {
        let scored = score_all(
            vec![section("First Title Here", "", 9), section("Guide Title Here", "", 9)],
            Domain::General,
            "",
        );
        assert_eq!(scored[0].section.title, "First Title Here");
        assert_eq!(scored[1].score, INFORMATIVE_TITLE_WEIGHT);
    }
}
