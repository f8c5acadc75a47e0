//! Dashboard state.
//!
//! DashboardState owns the pipeline components and composes them for every
//! data request: staleness controller (source read) → universe resolver →
//! filler → optional classifier.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use mfe_core::{NowParts, PanelClock};
use mfe_feed::{
    count_signals, fill_to_universe, Fetched, SourceConfig, SourceReader, StalenessController,
    Top10Reader, UniverseResolver,
};
use mfe_risk::{Classifier, ClassifierConfig};
use mfe_telemetry::Metrics;
use serde_json::Value;
use tracing::{debug, error};

use crate::types::{HealthResponse, PanelSnapshot, SnapshotVariant};

/// Shared state behind the panel routes.
#[derive(Clone)]
pub struct DashboardState {
    /// Source reader plus last good slot (one per process).
    controller: Arc<StalenessController>,
    resolver: Arc<UniverseResolver>,
    classifier: Arc<Classifier>,
    top10: Arc<Top10Reader>,
    clock: PanelClock,
    read_timeout: Duration,
}

impl DashboardState {
    pub fn new(
        controller: Arc<StalenessController>,
        resolver: UniverseResolver,
        classifier: Classifier,
        top10: Top10Reader,
        clock: PanelClock,
        read_timeout: Duration,
    ) -> Self {
        Self {
            controller,
            resolver: Arc::new(resolver),
            classifier: Arc::new(classifier),
            top10: Arc::new(top10),
            clock,
            read_timeout,
        }
    }

    /// Build the state from configuration.
    pub fn from_config(
        source: &SourceConfig,
        classifier: &ClassifierConfig,
        clock: PanelClock,
    ) -> Self {
        let controller = StalenessController::new(SourceReader::new(source.entrada_path.clone()));
        Self::new(
            Arc::new(controller),
            UniverseResolver::from_config(source),
            Classifier::new(classifier),
            Top10Reader::new(source.top10_path.clone()),
            clock,
            source.read_timeout(),
        )
    }

    pub fn now(&self) -> NowParts {
        self.clock.now()
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            ok: true,
            server_now: self.now().datetime,
        }
    }

    /// Read the source and build a snapshot.
    ///
    /// Never fails: read errors yield a stale snapshot, internal faults an
    /// empty one.
    pub async fn collect_snapshot(&self, variant: SnapshotVariant) -> PanelSnapshot {
        let now = self.now();
        let fetched = self.controller.fetch_bounded(self.read_timeout).await;
        if let Some(kind) = fetched.failure {
            Metrics::source_read_failure(kind);
        }

        let snapshot = guarded(&now, || self.build_snapshot(&fetched, &now, variant));

        Metrics::snapshot_freshness(snapshot.stale);
        Metrics::snapshot_counts(snapshot.universe_total, snapshot.signal_total);
        snapshot
    }

    /// Compose a snapshot from an already fetched payload.
    pub fn build_snapshot(
        &self,
        fetched: &Fetched,
        now: &NowParts,
        variant: SnapshotVariant,
    ) -> PanelSnapshot {
        let payload = &fetched.payload;
        let (universe, universe_source) = self.resolver.resolve_with_source(&payload.records);
        debug!(
            universe_source = universe_source.as_str(),
            universe_size = universe.len(),
            source_records = payload.records.len(),
            "Universe resolved"
        );

        let mut records = fill_to_universe(&payload.records, &universe, now);
        if variant == SnapshotVariant::Classified {
            for record in &mut records {
                self.classifier.classify_record(record);
            }
        }

        PanelSnapshot {
            universe_total: universe.len(),
            displayed_total: records.len(),
            signal_total: count_signals(&records),
            records,
            last_update: payload.last_update.clone(),
            stale: fetched.is_stale(),
            server_now: now.datetime.clone(),
            server_date: now.date.clone(),
            server_time: now.time.clone(),
            gain_min: payload.gain_min.clone(),
            assert_min: payload.assert_min.clone(),
        }
    }

    /// Top10 summary document (empty-shaped on failure).
    pub async fn top10(&self) -> Value {
        self.top10.read_or_empty(self.read_timeout).await
    }
}

/// Run a snapshot build, answering a panic with an empty stale snapshot.
fn guarded<F>(now: &NowParts, build: F) -> PanelSnapshot
where
    F: FnOnce() -> PanelSnapshot,
{
    match catch_unwind(AssertUnwindSafe(build)) {
        Ok(snapshot) => snapshot,
        Err(_) => {
            error!("Snapshot build failed, serving empty snapshot");
            Metrics::snapshot_fault();
            PanelSnapshot::empty(now)
        }
    }
}

impl std::fmt::Debug for DashboardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardState")
            .field("source", &self.controller.reader().path())
            .field("freshness", &self.controller.freshness())
            .field("top10", &self.top10.path())
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
