/// Ordered, trimmed, non-empty lines of one page.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
