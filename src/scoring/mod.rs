pub mod observer;

use crate::core::{NameScore, NormalizedName, RankedSequence};

pub use observer::{ScoreObserver, TracingObserver};

/// Alphabetical value of a name: A=1, B=2, ... Z=26, summed.
pub fn letter_sum(name: &NormalizedName) -> u64 {
    name.as_str()
        .bytes()
        .map(|b| u64::from(b - b'A' + 1))
        .sum()
}

/// Sum of `letter_sum * position` over the ranked names.
pub fn total_score(ranked: &RankedSequence) -> u64 {
    ranked
        .positioned()
        .map(|p| letter_sum(p.name) * p.position)
        .sum()
}

/// Per-name contributions, in rank order
pub fn breakdown(ranked: &RankedSequence) -> Vec<NameScore> {
    ranked
        .positioned()
        .map(|p| {
            let letter_sum = letter_sum(p.name);
            NameScore {
                name: p.name.clone(),
                letter_sum,
                position: p.position,
                score: letter_sum * p.position,
            }
        })
        .collect()
}
