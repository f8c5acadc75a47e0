//! Display values: producer fields passed through to the panel untouched.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::str::FromStr;

/// A display field of a canonical record.
///
/// `Empty` is the explicit neutral placeholder (serialized as `""`). It is
/// never a stand-in for a computed value such as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayValue {
    #[default]
    Empty,
    Value(Value),
}

impl DisplayValue {
    /// Wrap a producer value. Missing, `null` and `""` become `Empty`.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self::Empty,
            Some(Value::String(s)) if s.is_empty() => Self::Empty,
            Some(v) => Self::Value(v.clone()),
        }
    }

    /// Label value (used for classifier output).
    pub fn text(label: impl Into<String>) -> Self {
        Self::Value(Value::String(label.into()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Numeric reading of the value.
    ///
    /// Accepts JSON numbers and numeric strings ("4.5", "4,5", "1e-3").
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Empty => None,
            Self::Value(Value::Number(n)) => parse_decimal(&n.to_string()),
            Self::Value(Value::String(s)) => parse_decimal(&s.trim().replace(',', ".")),
            Self::Value(_) => None,
        }
    }

    /// Replace a negative numeric value by its magnitude.
    ///
    /// The representation is kept: numbers stay numbers and numeric strings
    /// stay strings. Non-numeric values are returned unchanged.
    pub fn magnitude(self) -> Self {
        match self {
            Self::Value(Value::Number(n)) => Self::Value(Value::Number(abs_number(n))),
            Self::Value(Value::String(s)) => {
                let trimmed = s.trim();
                match trimmed.strip_prefix('-') {
                    Some(rest) if parse_decimal(&rest.replace(',', ".")).is_some() => {
                        Self::Value(Value::String(rest.to_string()))
                    }
                    _ => Self::Value(Value::String(s)),
                }
            }
            other => other,
        }
    }
}

impl Serialize for DisplayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        Self::from_raw(Some(&value))
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .or_else(|| saturate(s))
}

/// Out-of-range magnitudes clamp to the decimal bounds.
fn saturate(s: &str) -> Option<Decimal> {
    let f: f64 = s.parse().ok().filter(|f: &f64| f.is_finite())?;
    if f >= 1.0 {
        Some(Decimal::MAX)
    } else if f <= -1.0 {
        Some(Decimal::MIN)
    } else {
        None
    }
}

fn abs_number(n: Number) -> Number {
    if let Some(i) = n.as_i64() {
        if i < 0 {
            return Number::from(i.unsigned_abs());
        }
        return n;
    }
    match n.as_f64() {
        Some(f) if f < 0.0 => Number::from_f64(f.abs()).unwrap_or(n),
        _ => n,
    }
}
