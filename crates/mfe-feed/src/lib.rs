//! Source snapshot pipeline for the MFE panel.
//!
//! Loads the JSON file written by the external worker and reshapes it into
//! exactly one canonical record per universe instrument:
//!
//! ```text
//! entrada.json ──► SourceReader ──► StalenessController (last good slot)
//!                                        │
//!                        UniverseResolver ◄┘ (override > file > source)
//!                                        │
//!                          normalize_record ──► fill_to_universe
//! ```
//!
//! Read failures never reach the caller: the staleness controller answers
//! with the last good payload (or an empty one) and flags it as stale.

pub mod config;
pub mod error;
pub mod filler;
pub mod normalizer;
pub mod source;
pub mod staleness;
pub mod top10;
pub mod universe;

pub use config::SourceConfig;
pub use error::{FeedError, FeedResult};
pub use filler::{count_signals, fill_to_universe};
pub use normalizer::normalize_record;
pub use source::{SourcePayload, SourceReader};
pub use staleness::{Fetched, Freshness, LastGoodCache, StalenessController};
pub use top10::{empty_top10, Top10Reader};
pub use universe::{Universe, UniverseResolver, UniverseSource};
