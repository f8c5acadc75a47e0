//! Record normalization.
//!
//! Maps one producer record to the canonical schema. Missing display fields
//! become the empty placeholder; nothing is computed or estimated.

use mfe_core::{alias, CanonicalRecord, NowParts, RawRecord, Side};

/// Normalize a raw record against the reference "now".
///
/// Returns `None` when the record has no usable identifier.
pub fn normalize_record(raw: &RawRecord, now: &NowParts) -> Option<CanonicalRecord> {
    let instrument = raw.instrument()?;

    let side = raw
        .text(alias::SIDE)
        .map(|s| Side::parse(&s))
        .unwrap_or_default();

    Some(CanonicalRecord {
        instrument,
        side,
        price: raw.display(alias::PRICE),
        target: raw.display(alias::TARGET),
        gain_pct: raw.display(alias::GAIN_PCT).magnitude(),
        assertiveness: raw.display(alias::ASSERTIVENESS),
        score: raw.display(alias::SCORE),
        zone: raw.display(alias::ZONE),
        risk: raw.display(alias::RISK),
        priority: raw.display(alias::PRIORITY),
        // A blank producer date/time counts as absent and gets "now".
        date: raw.text(alias::DATE).unwrap_or_else(|| now.date.clone()),
        time: raw.text(alias::TIME).unwrap_or_else(|| now.time.clone()),
    })
}
