//! Prometheus metrics for the MFE panel.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. A registration failure means a
//! duplicate metric name, which is a programming error that must surface at
//! first use rather than be silently ignored.

use crate::error::TelemetryResult;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, Encoder, IntCounter,
    IntCounterVec, IntGauge, TextEncoder,
};

/// Requests served, by route.
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("mfe_requests_total", "Requests served by route", &["route"])
        .unwrap()
});

/// Source read failures, by kind (unavailable/malformed/timeout).
pub static SOURCE_READ_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "mfe_source_read_failures_total",
        "Source snapshot read failures by kind",
        &["kind"]
    )
    .unwrap()
});

/// Responses built from the last good snapshot.
pub static STALE_RESPONSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "mfe_stale_responses_total",
        "Responses served from the last good snapshot"
    )
    .unwrap()
});

/// Snapshot builds that panicked and were answered with an empty snapshot.
pub static SNAPSHOT_FAULTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "mfe_snapshot_faults_total",
        "Snapshot builds that failed internally"
    )
    .unwrap()
});

/// Size of the last resolved universe.
pub static UNIVERSE_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("mfe_universe_size", "Instruments in the last resolved universe").unwrap()
});

/// Active signals (LONG/SHORT) in the last snapshot.
pub static ACTIVE_SIGNALS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("mfe_active_signals", "LONG/SHORT signals in the last snapshot").unwrap()
});

/// Source freshness (1 = fresh, 0 = stale).
pub static SOURCE_FRESH: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("mfe_source_fresh", "Source freshness (1=fresh, 0=stale)").unwrap()
});

/// Metrics facade.
pub struct Metrics;

impl Metrics {
    /// Record a served request.
    pub fn request(route: &str) {
        REQUESTS_TOTAL.with_label_values(&[route]).inc();
    }

    /// Record a failed source read.
    pub fn source_read_failure(kind: &str) {
        SOURCE_READ_FAILURES_TOTAL.with_label_values(&[kind]).inc();
    }

    /// Record the freshness of a built snapshot.
    pub fn snapshot_freshness(stale: bool) {
        if stale {
            STALE_RESPONSES_TOTAL.inc();
            SOURCE_FRESH.set(0);
        } else {
            SOURCE_FRESH.set(1);
        }
    }

    /// Record a snapshot build fault.
    pub fn snapshot_fault() {
        SNAPSHOT_FAULTS_TOTAL.inc();
    }

    /// Record universe size and active signal count of a snapshot.
    pub fn snapshot_counts(universe_size: usize, active_signals: usize) {
        UNIVERSE_SIZE.set(universe_size as i64);
        ACTIVE_SIGNALS.set(active_signals as i64);
    }

    /// Render the default registry in the Prometheus text format.
    pub fn render() -> TelemetryResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
