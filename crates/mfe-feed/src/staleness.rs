//! Staleness and fallback control.
//!
//! Two states: `Fresh` (last read succeeded) and `Stale` (last read failed,
//! serving the last good payload). The last good payload lives in a single
//! slot that is replaced on every successful read and kept for the lifetime
//! of the process.

use crate::error::FeedResult;
use crate::source::{SourcePayload, SourceReader};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Freshness of a served payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
}

impl Freshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

/// Single-slot cache of the last successfully read payload.
#[derive(Debug, Default)]
pub struct LastGoodCache {
    slot: RwLock<Option<Arc<SourcePayload>>>,
}

impl LastGoodCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<SourcePayload>> {
        self.slot.read().clone()
    }

    /// Replace the cached payload (last writer wins).
    pub fn replace(&self, payload: SourcePayload) -> Arc<SourcePayload> {
        let payload = Arc::new(payload);
        *self.slot.write() = Some(payload.clone());
        payload
    }

    pub fn is_empty(&self) -> bool {
        self.slot.read().is_none()
    }
}

/// Payload chosen for one request.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub payload: Arc<SourcePayload>,
    pub freshness: Freshness,
    /// Failure label when the read failed (see `FeedError::kind`).
    pub failure: Option<&'static str>,
}

impl Fetched {
    pub fn is_stale(&self) -> bool {
        self.freshness.is_stale()
    }
}

/// Reads the source and falls back to the last good payload on failure.
#[derive(Debug)]
pub struct StalenessController {
    reader: SourceReader,
    cache: LastGoodCache,
    stale: AtomicBool,
}

impl StalenessController {
    pub fn new(reader: SourceReader) -> Self {
        Self {
            reader,
            cache: LastGoodCache::new(),
            stale: AtomicBool::new(false),
        }
    }

    pub fn reader(&self) -> &SourceReader {
        &self.reader
    }

    pub fn cache(&self) -> &LastGoodCache {
        &self.cache
    }

    /// Current state (state of the most recent read).
    pub fn freshness(&self) -> Freshness {
        if self.stale.load(Ordering::Acquire) {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }

    /// Bounded read with fallback.
    pub async fn fetch_bounded(&self, timeout: Duration) -> Fetched {
        self.settle(self.reader.read_with_timeout(timeout).await)
    }

    /// Apply a read result: cache on success, fall back on failure.
    pub fn settle(&self, result: FeedResult<SourcePayload>) -> Fetched {
        match result {
            Ok(payload) => {
                let payload = self.cache.replace(payload);
                self.transition(Freshness::Fresh);
                Fetched {
                    payload,
                    freshness: Freshness::Fresh,
                    failure: None,
                }
            }
            Err(e) => {
                let cached = self.cache.get();
                warn!(
                    error = %e,
                    path = %self.reader.path().display(),
                    has_last_good = cached.is_some(),
                    "Source read failed"
                );
                self.transition(Freshness::Stale);
                Fetched {
                    payload: cached.unwrap_or_default(),
                    freshness: Freshness::Stale,
                    failure: Some(e.kind()),
                }
            }
        }
    }

    fn transition(&self, next: Freshness) {
        let now_stale = next.is_stale();
        let was_stale = self.stale.swap(now_stale, Ordering::AcqRel);
        match (was_stale, now_stale) {
            (false, true) => warn!("Source went stale, serving last good snapshot"),
            (true, false) => info!("Source recovered"),
            _ => {}
        }
    }
}
