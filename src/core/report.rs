use serde::{Deserialize, Serialize};

use crate::core::{NormalizedName, RankedSequence};

/// Contribution of one ranked name to the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameScore {
    pub name: NormalizedName,
    /// A=1 ... Z=26, summed over the name
    pub letter_sum: u64,
    /// 1-based rank
    pub position: u64,
    /// `letter_sum * position`
    pub score: u64,
}

/// Everything the pipeline computed for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreReport {
    pub ranked: RankedSequence,
    pub breakdown: Vec<NameScore>,
    pub total: u64,
}

impl ScoreReport {
    pub fn name_count(&self) -> usize {
        self.ranked.len()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} names, total score {}", self.name_count(), self.total)
    }
}

/// Payload accepted by the result sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    #[serde(rename = "ResultadoObtenido")]
    pub result: u64,
}

impl ScoreSubmission {
    pub fn new(result: u64) -> Self {
        Self { result }
    }
}
