use std::cmp::Ordering;

use super::score::ScoredSection;

pub const CANDIDATE_POOL_SIZE: usize = 20;
pub const OUTPUT_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedSection {
    /// 1-based, dense.
    pub rank: usize,
    pub scored: ScoredSection,
}

/// Sort by score descending and keep at most `pool_size`. The sort is stable,
/// so equal scores stay in discovery order.
pub fn rank_pool(mut scored: Vec<ScoredSection>, pool_size: usize) -> Vec<ScoredSection> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(pool_size);
    scored
}

/// Final selection: the first `output_size` of the ranked pool, numbered from 1.
pub fn select(scored: Vec<ScoredSection>, pool_size: usize, output_size: usize) -> Vec<RankedSection> {
    rank_pool(scored, pool_size)
        .into_iter()
        .take(output_size)
        .enumerate()
        .map(|(i, scored)| RankedSection { rank: i + 1, scored })
        .collect()
}

// ── Tests ──
