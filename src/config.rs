//! Settings for the source and sink collaborators.
//!
//! The scoring pipeline itself takes no configuration; only the HTTP
//! collaborators read these values.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::{NameScoreError, Result};

fn default_archive() -> String {
    "first_names".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_subject() -> String {
    "Your Name".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Top-level settings, usually loaded from YAML or the environment
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub source: SourceSettings,
    pub sink: SinkSettings,
}

/// Where the raw name list comes from
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceSettings {
    pub url: String,
    /// Sent verbatim as the `Authorization` header
    #[serde(default)]
    pub auth: String,
    #[serde(default = "default_archive")]
    pub archive: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Where the total score is submitted
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SinkSettings {
    pub url: String,
    /// Sent verbatim as the `Authorization` header
    #[serde(default)]
    pub auth: String,
    #[serde(default = "default_archive")]
    pub archive: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Subject name reported alongside the result
    #[serde(default = "default_subject")]
    pub subject: String,
    /// Submit as a test run instead of a production one
    #[serde(default)]
    pub test: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceSettings {
    pub fn new(url: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: auth.into(),
            archive: default_archive(),
            extension: default_extension(),
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SinkSettings {
    pub fn new(url: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: auth.into(),
            archive: default_archive(),
            extension: default_extension(),
            subject: default_subject(),
            test: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| NameScoreError::Config(format!("Invalid settings YAML: {}", e)))
    }

    /// Load settings from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NameScoreError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load settings from `NAME_SCORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| NameScoreError::Config(format!("{} is not set", key)))
        };

        let timeout_secs = match lookup("NAME_SCORE_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                NameScoreError::Config(format!("NAME_SCORE_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => default_timeout_secs(),
        };

        let mut source = SourceSettings::new(
            required("NAME_SCORE_SOURCE_URL")?,
            lookup("NAME_SCORE_SOURCE_AUTH").unwrap_or_default(),
        );
        source.timeout_secs = timeout_secs;

        let mut sink = SinkSettings::new(
            required("NAME_SCORE_TARGET_URL")?,
            lookup("NAME_SCORE_TARGET_AUTH").unwrap_or_default(),
        );
        sink.timeout_secs = timeout_secs;
        if let Some(subject) = lookup("NAME_SCORE_SUBJECT") {
            sink.subject = subject;
        }
        if let Some(test) = lookup("NAME_SCORE_TEST") {
            sink.test = parse_flag(&test)
                .ok_or_else(|| NameScoreError::Config(format!("NAME_SCORE_TEST is not a boolean: {}", test)))?;
        }

        Ok(Self { source, sink })
    }

    /// Override the reported subject name
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.sink.subject = subject.into();
        self
    }

    /// Override the test/production flag
    pub fn with_test(mut self, test: bool) -> Self {
        self.sink.test = test;
        self
    }

    /// Reject settings the collaborators cannot work with
    pub fn validate(&self) -> Result<()> {
        check_url("source.url", &self.source.url)?;
        check_url("sink.url", &self.sink.url)?;

        if self.sink.subject.trim().is_empty() {
            return Err(NameScoreError::Config("sink.subject is empty".to_string()));
        }
        if self.source.timeout_secs == 0 || self.sink.timeout_secs == 0 {
            return Err(NameScoreError::Config("timeout_secs must be positive".to_string()));
        }

        Ok(())
    }
}

fn check_url(field: &str, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(NameScoreError::Config(format!("{} is empty", field)));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(NameScoreError::Config(format!("{} must be an http(s) URL: {}", field, url)));
    }
    Ok(())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
