//! Instrument identifier.

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::fmt;

/// Normalized instrument identifier (e.g. "BTC", "SOL").
///
/// Always trimmed and uppercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InstrumentId(String);

impl InstrumentId {
    /// Normalize a raw identifier. Returns `None` when nothing is left after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    /// Normalize a raw identifier, failing on blank input.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::normalize(raw).ok_or_else(|| CoreError::InvalidInstrument(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstrumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
