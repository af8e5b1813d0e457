use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::config::{SinkSettings, SourceSettings};
use crate::core::ScoreSubmission;
use crate::error::{NameScoreError, Result};
use crate::providers::{NameSource, ResultSink, SubmissionReceipt};

/// Fetches the name list with an authenticated GET
pub struct HttpNameSource {
    client: Client,
    settings: SourceSettings,
}

/// Submits the total score with an authenticated POST
pub struct HttpResultSink {
    client: Client,
    settings: SinkSettings,
}

/// Append URL-encoded query parameters to a base URL
fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

/// Extract the `NAME` field of every record in a JSON array.
///
/// Numeric and boolean `NAME`s are taken in their JSON text form. A record
/// whose `NAME` is absent, null, an array or an object fails the whole
/// fetch; it is never read as an empty name.
pub fn parse_name_records(body: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| NameScoreError::source_unavailable(format!("Invalid JSON: {}", e)))?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(NameScoreError::source_unavailable(format!(
                "Expected a JSON array of records, got {}",
                json_kind(&other)
            )))
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record.get("NAME") {
            Some(Value::String(name)) => Ok(name.clone()),
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
            Some(Value::Null) | None => Err(NameScoreError::source_unavailable(format!(
                "Record {} has no NAME field",
                index
            ))),
            Some(other) => Err(NameScoreError::source_unavailable(format!(
                "Record {} has a NAME of type {}, expected a scalar",
                index,
                json_kind(other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl HttpNameSource {
    /// Create new HTTP name source
    pub fn new(settings: SourceSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, settings })
    }

    /// Full request URL including the archive selection
    pub fn request_url(&self) -> String {
        with_query(
            &self.settings.url,
            &[
                ("archivo", self.settings.archive.as_str()),
                ("extension", self.settings.extension.as_str()),
            ],
        )
    }
}

#[async_trait]
impl NameSource for HttpNameSource {
    async fn fetch_names(&self) -> Result<Vec<String>> {
        let url = self.request_url();
        tracing::debug!("Fetching names from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.settings.auth.as_str())
            .send()
            .await
            .map_err(|e| NameScoreError::source_unavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NameScoreError::source_unavailable(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NameScoreError::source_unavailable(format!("Unreadable body: {}", e)))?;

        let names = parse_name_records(&body)?;
        tracing::info!("Fetched {} names from {}", names.len(), self.name());

        Ok(names)
    }

    fn name(&self) -> &str {
        "http-source"
    }
}

impl HttpResultSink {
    /// Create new HTTP result sink
    pub fn new(settings: SinkSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { client, settings })
    }

    /// Full submission URL including subject and test flag
    pub fn request_url(&self) -> String {
        with_query(
            &self.settings.url,
            &[
                ("archivo", self.settings.archive.as_str()),
                ("extension", self.settings.extension.as_str()),
                ("nombre", self.settings.subject.as_str()),
                ("prueba", if self.settings.test { "1" } else { "0" }),
            ],
        )
    }
}

#[async_trait]
impl ResultSink for HttpResultSink {
    async fn submit(&self, total: u64) -> Result<SubmissionReceipt> {
        let url = self.request_url();
        let payload = serde_json::to_vec(&ScoreSubmission::new(total))?;
        tracing::debug!("Submitting {} to {}", total, url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.settings.auth.as_str())
            .header(CONTENT_TYPE, "application/json; utf-8")
            .body(payload)
            .send()
            .await
            .map_err(|e| NameScoreError::sink_rejected(None, format!("Request failed: {}", e)))?;

        let status = response.status();
        tracing::info!("Response Code: {}", status.as_u16());

        let raw_body = response.text().await.map_err(|e| {
            NameScoreError::sink_rejected(Some(status.as_u16()), format!("Unreadable body: {}", e))
        })?;
        let body: String = raw_body.lines().map(str::trim).collect();
        tracing::info!("Response Body: {}", body);

        if !status.is_success() {
            return Err(NameScoreError::sink_rejected(Some(status.as_u16()), body));
        }

        Ok(SubmissionReceipt::new(status.as_u16(), body))
    }

    fn name(&self) -> &str {
        "http-sink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_records() {
        let names = parse_name_records(r#"[{"NAME":"MARY"},{"NAME":" anna ","ID":2},{"NAME":""}]"#).unwrap();
        assert_eq!(names, vec!["MARY", " anna ", ""]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_name_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_name_is_source_error() {
        let err = parse_name_records(r#"[{"NAME":"MARY"},{"ID":7}]"#).unwrap_err();
        assert!(matches!(err, NameScoreError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("Record 1 has no NAME field"));

        let err = parse_name_records(r#"[{"NAME":null}]"#).unwrap_err();
        assert!(matches!(err, NameScoreError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_scalar_name_is_stringified() {
        let names = parse_name_records(r#"[{"NAME":"AMY"},{"NAME":42},{"NAME":true}]"#).unwrap();
        assert_eq!(names, vec!["AMY", "42", "true"]);
    }

    #[test]
    fn test_structured_name_is_source_error() {
        let err = parse_name_records(r#"[{"NAME":["A","B"]}]"#).unwrap_err();
        assert!(err.to_string().contains("type array"));

        let err = parse_name_records(r#"[{"NAME":{"first":"AMY"}}]"#).unwrap_err();
        assert!(matches!(err, NameScoreError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_unparsable_body_is_source_error() {
        let err = parse_name_records("<html>oops</html>").unwrap_err();
        assert_eq!(err.phase(), "fetch");

        let err = parse_name_records(r#"{"NAME":"MARY"}"#).unwrap_err();
        assert!(err.to_string().contains("got object"));
    }

    #[test]
    fn test_source_url() {
        let source = HttpNameSource::new(SourceSettings::new("https://names.example.com/files", "t")).unwrap();
        assert_eq!(
            source.request_url(),
            "https://names.example.com/files?archivo=first_names&extension=txt"
        );
    }

    #[test]
    fn test_sink_url_encodes_subject() {
        let mut settings = SinkSettings::new("https://results.example.com/submit?v=2", "t");
        settings.subject = "Ada Lovelace".to_string();
        settings.test = true;

        let sink = HttpResultSink::new(settings).unwrap();
        assert_eq!(
            sink.request_url(),
            "https://results.example.com/submit?v=2&archivo=first_names&extension=txt&nombre=Ada%20Lovelace&prueba=1"
        );
    }
}
