//! Top10 summary pass-through.
//!
//! `top10.json` is produced by a separate enrichment job. Its contents are
//! served as-is; when the file cannot be read or parsed an empty-shaped
//! document is served instead.

use crate::error::{FeedError, FeedResult};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Empty-shaped top10 document.
pub fn empty_top10() -> Value {
    json!({
        "agora_brt": "",
        "ultimo_calculo_brt": "",
        "total_top": 0,
        "total_sinais_top": 0,
        "top10": []
    })
}

#[derive(Debug, Clone)]
pub struct Top10Reader {
    path: PathBuf,
}

impl Top10Reader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the summary.
    pub async fn read(&self, timeout: Duration) -> FeedResult<Value> {
        let content = tokio::time::timeout(timeout, tokio::fs::read_to_string(&self.path))
            .await
            .map_err(|_| FeedError::ReadTimeout(timeout.as_millis() as u64))?
            .map_err(|e| FeedError::SourceUnavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read the summary, or the empty-shaped document on any failure.
    pub async fn read_or_empty(&self, timeout: Duration) -> Value {
        match self.read(timeout).await {
            Ok(doc) => doc,
            Err(e) => {
                debug!(error = %e, path = %self.path.display(), "Top10 unavailable");
                empty_top10()
            }
        }
    }
}
