//! # Name Score
//!
//! Scores a list of names and reports the total:
//! - Normalization to uppercase ASCII letters
//! - Alphabetical ranking
//! - Position-weighted letter-sum scoring
//! - HTTP source and sink collaborators
//!
//! ## Example Usage
//!
//! ```rust
//! use name_score::pipeline::compute_total;
//!
//! assert_eq!(compute_total(&["colin", " AMY ", "bob3"]), 236);
//! ```
//!
//! ```rust,no_run
//! use name_score::{RunOptions, ScoreEngine, Settings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_env()?;
//!     let engine = ScoreEngine::from_settings(&settings)?;
//!
//!     let outcome = engine.run(RunOptions::default()).await?;
//!     println!("Total Score: {}", outcome.total);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod providers;
pub mod ranking;
pub mod scoring;

// Re-export primary types
pub use config::{SinkSettings, Settings, SourceSettings};
pub use core::{NameScore, NormalizedName, PositionedName, RankedSequence, ScoreReport, ScoreSubmission};
pub use engine::{RunOptions, RunOutcome, ScoreEngine};
pub use error::{NameScoreError, Result};
pub use providers::{NameSource, ResultSink, SubmissionReceipt};
pub use scoring::{ScoreObserver, TracingObserver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
