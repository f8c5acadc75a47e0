//! Universe filling.
//!
//! Produces exactly one record per universe instrument, in universe order.
//! Instruments without data get a no-entry placeholder; no trade signal is
//! ever fabricated.

use crate::normalizer::normalize_record;
use crate::universe::Universe;
use mfe_core::{CanonicalRecord, InstrumentId, NowParts, RawRecord};
use std::collections::HashMap;

/// Reconcile raw records against the universe.
///
/// Duplicate identifiers in `records` resolve to the last one. Records for
/// instruments outside the universe are ignored.
pub fn fill_to_universe(
    records: &[RawRecord],
    universe: &Universe,
    now: &NowParts,
) -> Vec<CanonicalRecord> {
    let mut by_instrument: HashMap<InstrumentId, CanonicalRecord> = records
        .iter()
        .filter_map(|raw| normalize_record(raw, now))
        .map(|rec| (rec.instrument.clone(), rec))
        .collect();

    universe
        .iter()
        .map(|id| {
            by_instrument
                .remove(id)
                .unwrap_or_else(|| CanonicalRecord::placeholder(id.clone(), &now.date, &now.time))
        })
        .collect()
}

/// Number of actionable signals (LONG or SHORT).
pub fn count_signals(records: &[CanonicalRecord]) -> usize {
    records.iter().filter(|r| r.side.is_active()).count()
}
