use thiserror::Error;

/// Main error type for the name-score pipeline
#[derive(Error, Debug)]
pub enum NameScoreError {
    /// Name list could not be fetched or parsed
    #[error("Source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// Result submission failed or was refused
    #[error("Sink rejected submission{}: {message}", http_status(.status))]
    SinkRejected { status: Option<u16>, message: String },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

fn http_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl NameScoreError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        NameScoreError::SourceUnavailable { message: message.into() }
    }

    pub fn sink_rejected(status: Option<u16>, message: impl Into<String>) -> Self {
        NameScoreError::SinkRejected { status, message: message.into() }
    }

    /// Pipeline phase the error belongs to, for operator-facing reports
    pub fn phase(&self) -> &'static str {
        match self {
            NameScoreError::SourceUnavailable { .. } => "fetch",
            NameScoreError::SinkRejected { .. } => "submit",
            NameScoreError::Config(_) => "config",
            NameScoreError::HttpRequest(_)
            | NameScoreError::Json(_)
            | NameScoreError::Other(_) => "internal",
        }
    }
}

impl From<String> for NameScoreError {
    fn from(s: String) -> Self {
        NameScoreError::Other(s)
    }
}

impl From<&str> for NameScoreError {
    fn from(s: &str) -> Self {
        NameScoreError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, NameScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(NameScoreError::source_unavailable("down").phase(), "fetch");
        assert_eq!(NameScoreError::sink_rejected(Some(500), "boom").phase(), "submit");
        assert_eq!(NameScoreError::Config("missing url".into()).phase(), "config");
        assert_eq!(NameScoreError::from("oops").phase(), "internal");
    }

    #[test]
    fn test_sink_rejected_display() {
        let with_status = NameScoreError::sink_rejected(Some(403), "forbidden");
        assert_eq!(with_status.to_string(), "Sink rejected submission (HTTP 403): forbidden");

        let transport = NameScoreError::sink_rejected(None, "connection refused");
        assert_eq!(transport.to_string(), "Sink rejected submission: connection refused");
    }
}
