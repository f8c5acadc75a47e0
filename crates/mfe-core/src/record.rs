//! Raw producer records and the canonical per-instrument record.

use crate::instrument::InstrumentId;
use crate::labels::Side;
use crate::value::DisplayValue;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field name aliases accepted from the producer, in lookup order.
pub mod alias {
    pub const INSTRUMENT: &[&str] = &["par", "PAR", "pair", "symbol"];
    pub const SIDE: &[&str] = &["side", "sinal", "SIDE", "lado"];
    pub const PRICE: &[&str] = &["preco", "price"];
    pub const TARGET: &[&str] = &["alvo", "target"];
    pub const GAIN_PCT: &[&str] = &["ganho_pct", "gain_pct"];
    pub const ASSERTIVENESS: &[&str] = &["assertividade", "assert", "confidence"];
    pub const SCORE: &[&str] = &["score"];
    pub const ZONE: &[&str] = &["zona", "zone"];
    pub const RISK: &[&str] = &["risco", "risk"];
    pub const PRIORITY: &[&str] = &["prioridade", "priority"];
    pub const DATE: &[&str] = &["data", "date"];
    pub const TIME: &[&str] = &["hora", "time"];
}

/// Loosely-keyed record as written by the external worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build from a JSON value. Only objects are records.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// First alias present with a non-null value.
    pub fn field(&self, aliases: &[&str]) -> Option<&Value> {
        aliases
            .iter()
            .filter_map(|name| self.0.get(*name))
            .find(|v| !v.is_null())
    }

    /// Text reading of the first present alias (trimmed, non-empty).
    ///
    /// Numbers are rendered; other JSON types are not text.
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        let text = match self.field(aliases)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Normalized identifier, if the record carries one.
    pub fn instrument(&self) -> Option<InstrumentId> {
        self.text(alias::INSTRUMENT)
            .and_then(|s| InstrumentId::normalize(&s))
    }

    pub fn display(&self, aliases: &[&str]) -> DisplayValue {
        DisplayValue::from_raw(self.field(aliases))
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Canonical panel record, one per universe instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    #[serde(rename = "par")]
    pub instrument: InstrumentId,
    pub side: Side,
    #[serde(rename = "preco")]
    pub price: DisplayValue,
    #[serde(rename = "alvo")]
    pub target: DisplayValue,
    #[serde(rename = "ganho_pct")]
    pub gain_pct: DisplayValue,
    #[serde(rename = "assertividade")]
    pub assertiveness: DisplayValue,
    pub score: DisplayValue,
    #[serde(rename = "zona")]
    pub zone: DisplayValue,
    #[serde(rename = "risco")]
    pub risk: DisplayValue,
    #[serde(rename = "prioridade")]
    pub priority: DisplayValue,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
}

impl CanonicalRecord {
    /// Placeholder for an instrument without data: no-entry, every display
    /// field empty, stamped with the given date and time.
    pub fn placeholder(instrument: InstrumentId, date: &str, time: &str) -> Self {
        Self {
            instrument,
            side: Side::NoEntry,
            price: DisplayValue::Empty,
            target: DisplayValue::Empty,
            gain_pct: DisplayValue::Empty,
            assertiveness: DisplayValue::Empty,
            score: DisplayValue::Empty,
            zone: DisplayValue::Empty,
            risk: DisplayValue::Empty,
            priority: DisplayValue::Empty,
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}
