use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::core::ScoreReport;
use crate::error::{NameScoreError, Result};
use crate::pipeline;
use crate::providers::{HttpNameSource, HttpResultSink, NameSource, ResultSink, SubmissionReceipt};
use crate::scoring::observer::{replay, ScoreObserver};

/// Fetch → score → submit orchestrator
pub struct ScoreEngine {
    source: Arc<dyn NameSource>,
    sink: Arc<dyn ResultSink>,
    observer: Option<Arc<dyn ScoreObserver>>,
}

/// Per-run switches
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Send the total to the sink; `false` makes a dry run
    pub submit: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { submit: true }
    }
}

/// What a completed run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub total: u64,
    pub name_count: usize,
    /// `None` on a dry run
    pub receipt: Option<SubmissionReceipt>,
    pub latency_ms: f64,
    pub completed_at: DateTime<Utc>,
}

impl ScoreEngine {
    /// Create engine over arbitrary collaborators
    pub fn new(source: Arc<dyn NameSource>, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            source,
            sink,
            observer: None,
        }
    }

    /// Create engine with the HTTP source and sink described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let source = Arc::new(HttpNameSource::new(settings.source.clone())?);
        let sink = Arc::new(HttpResultSink::new(settings.sink.clone())?);

        Ok(Self::new(source, sink))
    }

    /// Report every scored name to `observer` after computation
    pub fn with_observer(mut self, observer: Arc<dyn ScoreObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Score raw names without any I/O
    pub fn compute<S: AsRef<str>>(&self, raw: &[S]) -> ScoreReport {
        let report = pipeline::compute(raw);

        if let Some(observer) = &self.observer {
            replay(observer.as_ref(), &report);
        }

        report
    }

    /// Fetch names, score them, and submit the total
    pub async fn run(&self, options: RunOptions) -> Result<RunOutcome> {
        let start = Instant::now();

        let names = self.source.fetch_names().await.map_err(|e| {
            tracing::error!("Fetching names from {} failed: {}", self.source.name(), e);
            into_source_error(e)
        })?;

        let report = self.compute(&names);
        tracing::info!("Total Score: {}", report.total);
        tracing::debug!("{}", report.display());

        let receipt = if options.submit {
            let receipt = self.sink.submit(report.total).await.map_err(|e| {
                tracing::error!(
                    "Submitting to {} failed, computed total was {}: {}",
                    self.sink.name(),
                    report.total,
                    e
                );
                into_sink_error(e)
            })?;
            Some(receipt)
        } else {
            tracing::info!("Dry run, skipping submission to {}", self.sink.name());
            None
        };

        Ok(RunOutcome {
            total: report.total,
            name_count: report.name_count(),
            receipt,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
            completed_at: Utc::now(),
        })
    }
}

fn into_source_error(err: NameScoreError) -> NameScoreError {
    match err {
        err @ NameScoreError::SourceUnavailable { .. } => err,
        other => NameScoreError::source_unavailable(other.to_string()),
    }
}

fn into_sink_error(err: NameScoreError) -> NameScoreError {
    match err {
        err @ NameScoreError::SinkRejected { .. } => err,
        other => NameScoreError::sink_rejected(None, other.to_string()),
    }
}
