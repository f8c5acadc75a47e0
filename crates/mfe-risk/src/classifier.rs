//! Risk / zone / priority classifier.
//!
//! # Zone (absolute gain `g`, percent)
//! - `g <= 0` or unknown: `-`
//! - `0 < g < 3`: AMARELA
//! - `3 <= g <= 8`: VERDE
//! - `g > 8`: VERMELHA
//!
//! # Priority
//! Rules run in `PRIORITY_RULES` order starting from BAIXA. Escalations skip
//! no-entry records. The assertiveness floor runs last and overrides every
//! rule before it, NÃO OPERAR included.

use crate::config::{normalized, ClassifierConfig};
use mfe_core::{CanonicalRecord, DisplayValue, InstrumentId, Priority, RiskTier, Zone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use tracing::trace;

const ZONE_GREEN_MIN: Decimal = dec!(3);
const ZONE_GREEN_MAX: Decimal = dec!(8);
const MEDIUM_PRIORITY_MIN: Decimal = dec!(3);
const MEDIUM_PRIORITY_MAX: Decimal = dec!(8);
const HIGH_PRIORITY_GAIN: Decimal = dec!(4);
const HIGH_PRIORITY_GAIN_STRONG: Decimal = dec!(6);
const ASSERTIVENESS_FLOOR: Decimal = dec!(65);

/// Zone for an absolute gain percentage.
pub fn zone_for_gain(gain: Option<Decimal>) -> Zone {
    match gain.map(|g| g.abs()) {
        None => Zone::Flat,
        Some(g) if g <= Decimal::ZERO => Zone::Flat,
        Some(g) if g < ZONE_GREEN_MIN => Zone::Yellow,
        Some(g) if g <= ZONE_GREEN_MAX => Zone::Green,
        Some(_) => Zone::Red,
    }
}

/// Inputs of the priority ladder.
#[derive(Debug, Clone, Copy)]
pub struct PriorityInput {
    pub no_entry: bool,
    /// Absolute gain percentage, if known.
    pub gain: Option<Decimal>,
    pub risk: RiskTier,
    pub assertiveness: Option<Decimal>,
}

impl PriorityInput {
    fn gain_at_least(&self, min: Decimal) -> bool {
        !self.no_entry && self.gain.is_some_and(|g| g >= min)
    }
}

/// One step of the priority ladder.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule {
    pub name: &'static str,
    /// Returns the new priority when the rule matches.
    pub apply: fn(&PriorityInput) -> Option<Priority>,
}

/// Priority ladder, evaluated in order.
pub const PRIORITY_RULES: &[PriorityRule] = &[
    PriorityRule {
        name: "no_entry",
        apply: |i| i.no_entry.then_some(Priority::DoNotTrade),
    },
    PriorityRule {
        name: "green_band_not_high_risk",
        apply: |i| {
            let in_band = !i.no_entry
                && i.gain
                    .is_some_and(|g| g >= MEDIUM_PRIORITY_MIN && g <= MEDIUM_PRIORITY_MAX);
            (in_band && i.risk != RiskTier::High).then_some(Priority::Medium)
        },
    },
    PriorityRule {
        name: "low_risk_gain_4",
        apply: |i| {
            (i.gain_at_least(HIGH_PRIORITY_GAIN) && i.risk == RiskTier::Low)
                .then_some(Priority::High)
        },
    },
    // Same outcome as the previous rule; kept so the two thresholds can diverge.
    PriorityRule {
        name: "low_risk_gain_6",
        apply: |i| {
            (i.gain_at_least(HIGH_PRIORITY_GAIN_STRONG) && i.risk == RiskTier::Low)
                .then_some(Priority::High)
        },
    },
    PriorityRule {
        name: "assertiveness_floor",
        apply: |i| {
            i.assertiveness
                .is_some_and(|a| a < ASSERTIVENESS_FLOOR)
                .then_some(Priority::Low)
        },
    },
];

/// Run the priority ladder.
pub fn priority_for(input: &PriorityInput) -> Priority {
    let mut priority = Priority::Low;
    for rule in PRIORITY_RULES {
        if let Some(next) = (rule.apply)(input) {
            trace!(rule = rule.name, from = %priority, to = %next, "Priority rule matched");
            priority = next;
        }
    }
    priority
}

/// Derived labels for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub risk: RiskTier,
    pub zone: Zone,
    pub priority: Priority,
}

/// Classifier with curated risk tier sets.
#[derive(Debug, Clone)]
pub struct Classifier {
    low_risk: HashSet<InstrumentId>,
    high_risk: HashSet<InstrumentId>,
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            low_risk: normalized(&config.low_risk).collect(),
            high_risk: normalized(&config.high_risk).collect(),
        }
    }

    /// Risk tier by set membership; anything unlisted is medium.
    pub fn risk_tier(&self, instrument: &InstrumentId) -> RiskTier {
        if self.low_risk.contains(instrument) {
            RiskTier::Low
        } else if self.high_risk.contains(instrument) {
            RiskTier::High
        } else {
            RiskTier::Medium
        }
    }

    pub fn classify(&self, record: &CanonicalRecord) -> Classification {
        let gain = record.gain_pct.as_decimal().map(|g| g.abs());
        let risk = self.risk_tier(&record.instrument);
        let input = PriorityInput {
            no_entry: record.side.is_no_entry(),
            gain,
            risk,
            assertiveness: record.assertiveness.as_decimal(),
        };

        Classification {
            risk,
            zone: zone_for_gain(gain),
            priority: priority_for(&input),
        }
    }

    /// Overwrite the record's risk, zone and priority labels.
    pub fn classify_record(&self, record: &mut CanonicalRecord) {
        let classification = self.classify(record);
        record.gain_pct = std::mem::take(&mut record.gain_pct).magnitude();
        record.risk = DisplayValue::text(classification.risk.as_str());
        record.zone = DisplayValue::text(classification.zone.as_str());
        record.priority = DisplayValue::text(classification.priority.as_str());
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfe_core::Side;
    use serde_json::json;

    fn input(gain: Option<Decimal>, risk: RiskTier, assertiveness: Option<Decimal>) -> PriorityInput {
        PriorityInput {
            no_entry: false,
            gain,
            risk,
            assertiveness,
        }
    }

    fn record(par: &str, side: Side, gain: serde_json::Value, assertiveness: serde_json::Value) -> CanonicalRecord {
        let mut rec = CanonicalRecord::placeholder(InstrumentId::parse(par).unwrap(), "2025-12-27", "14:13");
        rec.side = side;
        rec.gain_pct = DisplayValue::from(gain);
        rec.assertiveness = DisplayValue::from(assertiveness);
        rec
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(zone_for_gain(None), Zone::Flat);
        assert_eq!(zone_for_gain(Some(dec!(0))), Zone::Flat);
        assert_eq!(zone_for_gain(Some(dec!(0.01))), Zone::Yellow);
        assert_eq!(zone_for_gain(Some(dec!(2.9))), Zone::Yellow);
        assert_eq!(zone_for_gain(Some(dec!(3))), Zone::Green);
        assert_eq!(zone_for_gain(Some(dec!(8))), Zone::Green);
        assert_eq!(zone_for_gain(Some(dec!(8.1))), Zone::Red);
    }

    #[test]
    fn test_zone_uses_magnitude() {
        assert_eq!(zone_for_gain(Some(dec!(-5))), Zone::Green);
        assert_eq!(zone_for_gain(Some(dec!(-9))), Zone::Red);
    }

    #[test]
    fn test_priority_ladder() {
        assert_eq!(priority_for(&input(Some(dec!(2)), RiskTier::Low, None)), Priority::Low);
        assert_eq!(priority_for(&input(Some(dec!(3)), RiskTier::Medium, None)), Priority::Medium);
        assert_eq!(priority_for(&input(Some(dec!(3.5)), RiskTier::Low, None)), Priority::Medium);
        assert_eq!(priority_for(&input(Some(dec!(4)), RiskTier::Low, None)), Priority::High);
        assert_eq!(priority_for(&input(Some(dec!(5)), RiskTier::High, None)), Priority::Low);
        assert_eq!(priority_for(&input(Some(dec!(9)), RiskTier::Medium, None)), Priority::Low);
        assert_eq!(priority_for(&input(Some(dec!(12)), RiskTier::Low, None)), Priority::High);
        assert_eq!(priority_for(&input(None, RiskTier::Low, None)), Priority::Low);
    }

    #[test]
    fn test_assertiveness_floor_wins() {
        assert_eq!(
            priority_for(&input(Some(dec!(6)), RiskTier::Low, Some(dec!(50)))),
            Priority::Low
        );
        assert_eq!(
            priority_for(&input(Some(dec!(6)), RiskTier::Low, Some(dec!(65)))),
            Priority::High
        );
        assert_eq!(
            priority_for(&input(Some(dec!(5)), RiskTier::Medium, Some(dec!(64.9)))),
            Priority::Low
        );
    }

    #[test]
    fn test_no_entry_is_do_not_trade() {
        let i = PriorityInput {
            no_entry: true,
            gain: Some(dec!(6)),
            risk: RiskTier::Low,
            assertiveness: None,
        };
        assert_eq!(priority_for(&i), Priority::DoNotTrade);

        let i = PriorityInput {
            assertiveness: Some(dec!(70)),
            ..i
        };
        assert_eq!(priority_for(&i), Priority::DoNotTrade);
    }

    #[test]
    fn test_assertiveness_floor_overrides_no_entry() {
        let i = PriorityInput {
            no_entry: true,
            gain: Some(dec!(6)),
            risk: RiskTier::Low,
            assertiveness: Some(dec!(40)),
        };
        assert_eq!(priority_for(&i), Priority::Low);
    }

    #[test]
    fn test_risk_tier_membership() {
        let classifier = Classifier::new(&ClassifierConfig {
            low_risk: vec!["btc".to_string()],
            high_risk: vec!["PEPE".to_string()],
        });
        assert_eq!(classifier.risk_tier(&InstrumentId::parse("BTC").unwrap()), RiskTier::Low);
        assert_eq!(classifier.risk_tier(&InstrumentId::parse("PEPE").unwrap()), RiskTier::High);
        assert_eq!(classifier.risk_tier(&InstrumentId::parse("AVAX").unwrap()), RiskTier::Medium);
    }

    #[test]
    fn test_classify_record_writes_labels() {
        let classifier = Classifier::default();
        let mut rec = record("SOL", Side::Short, json!(-6.5), json!("72"));

        classifier.classify_record(&mut rec);
        assert_eq!(rec.gain_pct, DisplayValue::from(json!(6.5)));
        assert_eq!(rec.risk, DisplayValue::text("BAIXO"));
        assert_eq!(rec.zone, DisplayValue::text("VERDE"));
        assert_eq!(rec.priority, DisplayValue::text("ALTA"));
    }

    #[test]
    fn test_classify_placeholder() {
        let classifier = Classifier::default();
        let mut rec = CanonicalRecord::placeholder(InstrumentId::parse("DOT").unwrap(), "2025-12-27", "14:13");

        classifier.classify_record(&mut rec);
        assert_eq!(rec.zone, DisplayValue::text("-"));
        assert_eq!(rec.priority, DisplayValue::text("NÃO OPERAR"));
        assert!(rec.gain_pct.is_empty());
    }

    #[test]
    fn test_huge_gain_is_red() {
        let classifier = Classifier::default();
        let rec = record("AVAX", Side::Long, json!(1e30), json!(80));
        assert_eq!(classifier.classify(&rec).zone, Zone::Red);
    }

    #[test]
    fn test_classify_string_gain() {
        let classifier = Classifier::default();
        let rec = record("AVAX", Side::Long, json!("7,9"), json!(""));

        let c = classifier.classify(&rec);
        assert_eq!(c.risk, RiskTier::Medium);
        assert_eq!(c.zone, Zone::Green);
        assert_eq!(c.priority, Priority::Medium);
    }
}
