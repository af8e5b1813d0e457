pub mod name;
pub mod report;

pub use name::{NormalizedName, PositionedName, RankedSequence};
pub use report::{NameScore, ScoreReport, ScoreSubmission};
