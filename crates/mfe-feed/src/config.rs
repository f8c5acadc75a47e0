//! Source file configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Paths and universe settings for the source pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// JSON snapshot written by the worker.
    #[serde(default = "default_entrada_path")]
    pub entrada_path: PathBuf,
    /// Universe file, one identifier per line.
    #[serde(default = "default_universe_path")]
    pub universe_path: PathBuf,
    /// Comma-separated universe override (wins over the file when non-empty).
    #[serde(default)]
    pub universe_override: Option<String>,
    /// Derive the universe from the snapshot when override and file yield nothing.
    #[serde(default = "default_fallback_to_source")]
    pub fallback_to_source: bool,
    /// Top10 summary written by the enrichment job.
    #[serde(default = "default_top10_path")]
    pub top10_path: PathBuf,
    /// Upper bound for a single file read (ms).
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

fn default_entrada_path() -> PathBuf {
    PathBuf::from("/home/roteiro_ds/ENTRADA-MFE/entrada.json")
}

fn default_universe_path() -> PathBuf {
    PathBuf::from("coins_77.txt")
}

fn default_fallback_to_source() -> bool {
    true
}

fn default_top10_path() -> PathBuf {
    PathBuf::from("top10.json")
}

fn default_read_timeout_ms() -> u64 {
    2_000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            entrada_path: default_entrada_path(),
            universe_path: default_universe_path(),
            universe_override: None,
            fallback_to_source: default_fallback_to_source(),
            top10_path: default_top10_path(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl SourceConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
