//! Panel API types.
//!
//! Field names follow the panel UI contract (`posicional`, `ultima_atualizacao`, ...).

use mfe_core::{CanonicalRecord, NowParts};
use serde::Serialize;
use serde_json::Value;

/// Which shape of records a data route serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotVariant {
    /// Records as normalized; zone/risk/priority pass through from the source.
    Plain,
    /// Records with risk, zone and priority derived by the classifier.
    Classified,
}

/// Full panel snapshot, built fresh for every request.
#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    /// One record per universe instrument, in universe order.
    #[serde(rename = "posicional")]
    pub records: Vec<CanonicalRecord>,
    /// Last update written by the worker ("" when unknown).
    #[serde(rename = "ultima_atualizacao")]
    pub last_update: String,
    /// True when served from the last good snapshot.
    pub stale: bool,
    /// `YYYY-MM-DD HH:MM:SS`
    pub server_now: String,
    /// `YYYY-MM-DD`
    pub server_date: String,
    /// `HH:MM`
    pub server_time: String,
    #[serde(rename = "universo_total")]
    pub universe_total: usize,
    #[serde(rename = "total_exibidas")]
    pub displayed_total: usize,
    /// LONG/SHORT records.
    #[serde(rename = "total_sinais")]
    pub signal_total: usize,
    /// Global minimum gain, as written by the worker.
    pub gain_min: Option<Value>,
    /// Global minimum assertiveness, as written by the worker.
    pub assert_min: Option<Value>,
}

impl PanelSnapshot {
    /// Empty but well-formed snapshot, flagged stale.
    pub fn empty(now: &NowParts) -> Self {
        Self {
            records: Vec::new(),
            last_update: String::new(),
            stale: true,
            server_now: now.datetime.clone(),
            server_date: now.date.clone(),
            server_time: now.time.clone(),
            universe_total: 0,
            displayed_total: 0,
            signal_total: 0,
            gain_min: None,
            assert_min: None,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub server_now: String,
}
