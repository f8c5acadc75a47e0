//! Panel labels: trade side, risk tier, gain zone and trade priority.
//!
//! Wire values are the Portuguese labels the panel UI renders verbatim.

use serde::{Serialize, Serializer};
use std::fmt;

/// Trade direction signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Side {
    Long,
    Short,
    /// No-entry sentinel ("NÃO ENTRAR"): no signal, or no data for the instrument.
    #[default]
    NoEntry,
    /// Any other label the producer wrote, kept as given.
    Other(String),
}

impl Side {
    pub const NO_ENTRY_LABEL: &'static str = "NÃO ENTRAR";

    /// Interpret a producer label.
    ///
    /// Known labels are matched case-insensitively. Blank input is the
    /// no-entry sentinel; anything else passes through trimmed.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::NoEntry;
        }
        match trimmed.to_uppercase().as_str() {
            "LONG" => Self::Long,
            "SHORT" => Self::Short,
            "NÃO ENTRAR" | "NAO ENTRAR" => Self::NoEntry,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
            Self::NoEntry => Self::NO_ENTRY_LABEL,
            Self::Other(s) => s,
        }
    }

    /// True for an actionable signal (LONG or SHORT).
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Long | Self::Short)
    }

    pub fn is_no_entry(&self) -> bool {
        matches!(self, Self::NoEntry)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Side {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Instrument risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskTier {
    #[serde(rename = "BAIXO")]
    Low,
    #[serde(rename = "MÉDIO")]
    Medium,
    #[serde(rename = "ALTO")]
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "BAIXO",
            Self::Medium => "MÉDIO",
            Self::High => "ALTO",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gain zone derived from the absolute gain percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    /// No positive gain.
    #[serde(rename = "-")]
    Flat,
    #[serde(rename = "AMARELA")]
    Yellow,
    #[serde(rename = "VERDE")]
    Green,
    #[serde(rename = "VERMELHA")]
    Red,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "-",
            Self::Yellow => "AMARELA",
            Self::Green => "VERDE",
            Self::Red => "VERMELHA",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    #[serde(rename = "BAIXA")]
    Low,
    #[serde(rename = "MÉDIA")]
    Medium,
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "NÃO OPERAR")]
    DoNotTrade,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "BAIXA",
            Self::Medium => "MÉDIA",
            Self::High => "ALTA",
            Self::DoNotTrade => "NÃO OPERAR",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse_known_labels() {
        assert_eq!(Side::parse("long"), Side::Long);
        assert_eq!(Side::parse(" SHORT "), Side::Short);
        assert_eq!(Side::parse("não entrar"), Side::NoEntry);
        assert_eq!(Side::parse("NAO ENTRAR"), Side::NoEntry);
        assert_eq!(Side::parse(""), Side::NoEntry);
    }

    #[test]
    fn test_side_other_passes_through() {
        let side = Side::parse("AGUARDAR");
        assert_eq!(side, Side::Other("AGUARDAR".to_string()));
        assert_eq!(side.as_str(), "AGUARDAR");
        assert!(!side.is_active());
        assert!(!side.is_no_entry());
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(
            serde_json::to_string(&Side::NoEntry).unwrap(),
            "\"NÃO ENTRAR\""
        );
        assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), "\"MÉDIO\"");
        assert_eq!(serde_json::to_string(&Zone::Flat).unwrap(), "\"-\"");
        assert_eq!(
            serde_json::to_string(&Priority::DoNotTrade).unwrap(),
            "\"NÃO OPERAR\""
        );
    }
}
