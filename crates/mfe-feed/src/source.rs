//! Source snapshot reader.
//!
//! Reads `entrada.json` as written by the worker. The reader only validates
//! the minimal shape; retry and fallback belong to the staleness controller.

use crate::error::{FeedError, FeedResult};
use mfe_core::RawRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// List of per-instrument records.
pub const RECORDS_FIELD: &str = "posicional";
/// Last update timestamp written by the worker.
pub const LAST_UPDATE_FIELD: &str = "ultima_atualizacao";
pub const GAIN_MIN_FIELD: &str = "gain_min";
pub const ASSERT_MIN_FIELD: &str = "assert_min";

/// Parsed source snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcePayload {
    /// Raw records (non-object entries dropped).
    pub records: Vec<RawRecord>,
    /// Trimmed last update string, empty when unknown.
    pub last_update: String,
    /// Global minimum gain, passed through as written.
    pub gain_min: Option<Value>,
    /// Global minimum assertiveness, passed through as written.
    pub assert_min: Option<Value>,
}

impl SourcePayload {
    /// Parse snapshot JSON text.
    pub fn parse(text: &str) -> FeedResult<Self> {
        let document: Value = serde_json::from_str(text)?;
        Ok(Self::from_document(document))
    }

    /// Extract the payload from a parsed document.
    ///
    /// Missing or mistyped fields fall back to empty values.
    pub fn from_document(mut document: Value) -> Self {
        let records = match document.get_mut(RECORDS_FIELD).map(Value::take) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(RawRecord::from_value)
                .collect(),
            _ => Vec::new(),
        };

        let last_update = match document.get(LAST_UPDATE_FIELD) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Self {
            records,
            last_update,
            gain_min: passthrough(&document, GAIN_MIN_FIELD),
            assert_min: passthrough(&document, ASSERT_MIN_FIELD),
        }
    }
}

fn passthrough(document: &Value, field: &str) -> Option<Value> {
    document.get(field).filter(|v| !v.is_null()).cloned()
}

/// Reads the source snapshot file.
#[derive(Debug, Clone)]
pub struct SourceReader {
    path: PathBuf,
}

impl SourceReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse with an upper bound on the file read.
    pub async fn read_with_timeout(&self, timeout: Duration) -> FeedResult<SourcePayload> {
        let content = tokio::time::timeout(timeout, tokio::fs::read_to_string(&self.path))
            .await
            .map_err(|_| FeedError::ReadTimeout(timeout.as_millis() as u64))?
            .map_err(|e| self.unavailable(e))?;
        self.decode(&content)
    }

    fn decode(&self, content: &str) -> FeedResult<SourcePayload> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(FeedError::SourceUnavailable {
                path: self.path.display().to_string(),
                reason: "file is empty".to_string(),
            });
        }
        SourcePayload::parse(trimmed)
    }

    fn unavailable(&self, e: std::io::Error) -> FeedError {
        FeedError::SourceUnavailable {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn reader_with(dir: &TempDir, content: &str) -> SourceReader {
        let path = dir.path().join("entrada.json");
        std::fs::write(&path, content).unwrap();
        SourceReader::new(path)
    }

    #[tokio::test]
    async fn test_read_full_payload() {
        let dir = TempDir::new().unwrap();
        let reader = reader_with(
            &dir,
            r#"{
                "posicional": [{"par": "BTC", "side": "LONG"}, 42, {"par": "ETH"}],
                "ultima_atualizacao": "  2025-12-27 14:13  ",
                "gain_min": 3,
                "assert_min": "65"
            }"#,
        );

        let payload = reader.read_with_timeout(TIMEOUT).await.unwrap();
        assert_eq!(payload.records.len(), 2);
        assert_eq!(payload.last_update, "2025-12-27 14:13");
        assert_eq!(payload.gain_min, Some(json!(3)));
        assert_eq!(payload.assert_min, Some(json!("65")));
    }

    #[tokio::test]
    async fn test_missing_fields_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let reader = reader_with(&dir, r#"{"posicional": {"par": "BTC"}, "gain_min": null}"#);

        let payload = reader.read_with_timeout(TIMEOUT).await.unwrap();
        assert!(payload.records.is_empty());
        assert_eq!(payload.last_update, "");
        assert_eq!(payload.gain_min, None);
        assert_eq!(payload.assert_min, None);
    }

    #[test]
    fn test_non_object_document_is_empty_payload() {
        let payload = SourcePayload::parse("[1, 2, 3]").unwrap();
        assert_eq!(payload, SourcePayload::default());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let reader = SourceReader::new(dir.path().join("nope.json"));
        assert!(matches!(
            reader.read_with_timeout(TIMEOUT).await,
            Err(FeedError::SourceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_whitespace_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let reader = reader_with(&dir, "  \n\t ");
        assert!(matches!(
            reader.read_with_timeout(TIMEOUT).await,
            Err(FeedError::SourceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let dir = TempDir::new().unwrap();
        let reader = reader_with(&dir, r#"{"posicional": [{"par": "BTC"}"#);
        let err = reader.read_with_timeout(TIMEOUT).await.unwrap_err();
        assert!(matches!(err, FeedError::SourceMalformed(_)));
        assert_eq!(err.kind(), "malformed");
    }

    #[tokio::test]
    async fn test_bounded_read() {
        let dir = TempDir::new().unwrap();
        let reader = reader_with(&dir, r#"{"posicional": [{"par": "SOL"}]}"#);

        let payload = reader
            .read_with_timeout(TIMEOUT)
            .await
            .unwrap();
        assert_eq!(payload.records.len(), 1);
    }
}
