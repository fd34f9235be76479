pub mod score;
pub mod select;

pub use score::{score_all, ScoredSection};
pub use select::{rank_pool, select, RankedSection, CANDIDATE_POOL_SIZE, OUTPUT_SIZE};
