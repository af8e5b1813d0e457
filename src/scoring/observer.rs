use crate::core::{NameScore, ScoreReport};

/// Receives scoring details after the pure scorer has run.
///
/// Lets callers report intermediate values without the scoring loop
/// producing side effects of its own.
pub trait ScoreObserver: Send + Sync {
    /// Called once per ranked name, in rank order
    fn on_name(&self, _entry: &NameScore) {}

    /// Called once after every name has been reported
    fn on_total(&self, _total: u64, _name_count: usize) {}
}

/// Walk a finished report through an observer
pub fn replay(observer: &dyn ScoreObserver, report: &ScoreReport) {
    for entry in &report.breakdown {
        observer.on_name(entry);
    }
    observer.on_total(report.total, report.name_count());
}

/// Emits the per-name breakdown as `debug` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScoreObserver for TracingObserver {
    fn on_name(&self, entry: &NameScore) {
        tracing::debug!(
            name = %entry.name,
            value = entry.letter_sum,
            position = entry.position,
            score = entry.score,
            "Scored name"
        );
    }

    fn on_total(&self, total: u64, name_count: usize) {
        tracing::debug!(total, name_count, "Scoring finished");
    }
}
