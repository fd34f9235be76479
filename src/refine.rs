use std::sync::LazyLock;

use regex::Regex;

use crate::parser::lines::{char_len, split_lines};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lines at or below this length are treated as noise.
pub const SUBSTANTIAL_LINE_CHARS: usize = 30;
pub const MAX_SUBSTANTIAL_LINES: usize = 15;
pub const MAX_EXCERPT_CHARS: usize = 800;
/// A sentence-boundary cut is only taken past this position.
pub const MIN_SENTENCE_CUT_CHARS: usize = 400;
pub const FALLBACK_EXCERPT: &str = "Content extracted from relevant sections.";

/// Clean a context window into a short excerpt of at most 800 chars.
pub fn refine(context: &str) -> String {
    let substantial: Vec<&str> = split_lines(context)
        .into_iter()
        .filter(|l| char_len(l) > SUBSTANTIAL_LINE_CHARS)
        .take(MAX_SUBSTANTIAL_LINES)
        .collect();

    let joined = if substantial.is_empty() {
        context.to_string()
    } else {
        substantial.join(" ")
    };

    let cleaned = WHITESPACE_RE.replace_all(&joined, " ").trim().to_string();
    let text = truncate_at_sentence(&cleaned);

    if text.is_empty() {
        FALLBACK_EXCERPT.to_string()
    } else {
        text
    }
}

fn truncate_at_sentence(text: &str) -> String {
    let Some((cut, _)) = text.char_indices().nth(MAX_EXCERPT_CHARS) else {
        return text.to_string();
    };
    let hard = &text[..cut];

    match hard.rfind('.') {
        Some(dot) if char_len(&hard[..dot]) > MIN_SENTENCE_CUT_CHARS => hard[..=dot].to_string(),
        _ => hard.to_string(),
    }
}

// ── Tests ──
