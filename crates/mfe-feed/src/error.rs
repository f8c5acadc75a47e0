//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Source unavailable ({path}): {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("Source malformed: {0}")]
    SourceMalformed(#[from] serde_json::Error),

    #[error("Source read timed out after {0}ms")]
    ReadTimeout(u64),

    #[error("Universe unavailable ({path}): {reason}")]
    UniverseUnavailable { path: String, reason: String },
}

impl FeedError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "unavailable",
            Self::SourceMalformed(_) => "malformed",
            Self::ReadTimeout(_) => "timeout",
            Self::UniverseUnavailable { .. } => "universe_unavailable",
        }
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
