pub mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub use http::{parse_name_records, HttpNameSource, HttpResultSink};

/// Supplies the raw names to score
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Fetch the complete, ordered list of raw names
    async fn fetch_names(&self) -> Result<Vec<String>>;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Accepts the computed total score
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Submit the total score, returning what the sink answered
    async fn submit(&self, total: u64) -> Result<SubmissionReceipt>;

    /// Get sink name for logging
    fn name(&self) -> &str;
}

/// Status and body returned by the sink; the body is never interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}

impl SubmissionReceipt {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
