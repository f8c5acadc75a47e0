//! Classifier configuration.

use crate::error::{RiskError, RiskResult};
use mfe_core::InstrumentId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Curated risk tier membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Instruments classified as low risk (BAIXO).
    #[serde(default = "default_low_risk")]
    pub low_risk: Vec<String>,
    /// Instruments classified as high risk (ALTO).
    #[serde(default = "default_high_risk")]
    pub high_risk: Vec<String>,
}

fn default_low_risk() -> Vec<String> {
    ["BTC", "ETH", "BNB", "SOL", "XRP", "ADA", "LTC", "TRX", "LINK", "DOT"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_high_risk() -> Vec<String> {
    ["PEPE", "SHIB", "BONK", "FLOKI", "WIF", "MEME", "TURBO", "NOT", "PEOPLE", "1000SATS"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            low_risk: default_low_risk(),
            high_risk: default_high_risk(),
        }
    }
}

impl ClassifierConfig {
    /// Reject instruments listed in both tiers.
    pub fn validate(&self) -> RiskResult<()> {
        let low: HashSet<InstrumentId> = normalized(&self.low_risk).collect();
        let mut overlap: Vec<String> = normalized(&self.high_risk)
            .filter(|id| low.contains(id))
            .map(|id| id.to_string())
            .collect();

        if overlap.is_empty() {
            return Ok(());
        }
        overlap.sort();
        overlap.dedup();
        Err(RiskError::ConfigError(format!(
            "instruments listed as both low and high risk: {}",
            overlap.join(", ")
        )))
    }
}

pub(crate) fn normalized(list: &[String]) -> impl Iterator<Item = InstrumentId> + '_ {
    list.iter().filter_map(|s| InstrumentId::normalize(s))
}
