//! Core domain types for the MFE entry panel.
//!
//! This crate provides the types shared by the feed pipeline, the classifier
//! and the dashboard:
//! - `InstrumentId`: Normalized (trimmed, uppercase) instrument identifier
//! - `RawRecord`: Loosely-keyed producer record with alias resolution
//! - `CanonicalRecord`: Fixed per-instrument output schema
//! - `Side`, `RiskTier`, `Zone`, `Priority`: Panel labels
//! - `PanelClock`: Local "now" used to stamp records

pub mod clock;
pub mod error;
pub mod instrument;
pub mod labels;
pub mod record;
pub mod value;

pub use clock::{NowParts, PanelClock, BRT_OFFSET_MINUTES};
pub use error::{CoreError, Result};
pub use instrument::InstrumentId;
pub use labels::{Priority, RiskTier, Side, Zone};
pub use record::{alias, CanonicalRecord, RawRecord};
pub use value::DisplayValue;
