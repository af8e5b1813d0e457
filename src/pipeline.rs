//! The pure normalize → rank → score pipeline.
//!
//! Nothing here touches the network, logs, or reads configuration.

use crate::core::ScoreReport;
use crate::normalize::normalize_names;
use crate::ranking::rank;
use crate::scoring::{breakdown, total_score};

/// Run the whole pipeline over raw names and keep the intermediate results
pub fn compute<S: AsRef<str>>(raw: &[S]) -> ScoreReport {
    let ranked = rank(normalize_names(raw));
    let breakdown = breakdown(&ranked);
    let total = total_score(&ranked);

    ScoreReport {
        ranked,
        breakdown,
        total,
    }
}

/// Total score of raw names
pub fn compute_total<S: AsRef<str>>(raw: &[S]) -> u64 {
    total_score(&rank(normalize_names(raw)))
}
