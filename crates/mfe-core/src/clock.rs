//! Panel clock.
//!
//! The panel shows local wall-clock time (BRT by default). Brazil has had no
//! daylight saving since 2019, so a fixed offset is exact.

use crate::error::{CoreError, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// America/Sao_Paulo offset in minutes.
pub const BRT_OFFSET_MINUTES: i32 = -180;

/// Formatted "now" used to stamp records and responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowParts {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PanelClock {
    offset: FixedOffset,
}

impl PanelClock {
    pub fn new(utc_offset_minutes: i32) -> Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(CoreError::InvalidUtcOffset(utc_offset_minutes))?;
        Ok(Self { offset })
    }

    pub fn brt() -> Self {
        Self {
            offset: FixedOffset::west_opt(3 * 3600).unwrap_or_else(|| Utc.fix()),
        }
    }

    pub fn now(&self) -> NowParts {
        self.now_at(Utc::now())
    }

    pub fn now_at(&self, instant: DateTime<Utc>) -> NowParts {
        let local = instant.with_timezone(&self.offset);
        NowParts {
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M").to_string(),
            datetime: local.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl Default for PanelClock {
    fn default() -> Self {
        Self::brt()
    }
}
