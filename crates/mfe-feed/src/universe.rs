//! Universe resolution.
//!
//! The universe is the fixed, ordered set of instruments the panel always
//! shows. Resolution order, first non-empty wins:
//! 1. explicit override list (comma-separated)
//! 2. universe file (one identifier per line, `#` comments)
//! 3. instruments present in the current source snapshot (optional)

use crate::config::SourceConfig;
use crate::error::{FeedError, FeedResult};
use mfe_core::{InstrumentId, RawRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered, deduplicated set of instrument identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    members: Vec<InstrumentId>,
}

impl Universe {
    /// Build from raw identifiers: trim, uppercase, drop blanks, keep first occurrence.
    pub fn from_identifiers<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_instruments(
            items
                .into_iter()
                .filter_map(|s| InstrumentId::normalize(s.as_ref())),
        )
    }

    fn from_instruments(items: impl IntoIterator<Item = InstrumentId>) -> Self {
        let mut seen = HashSet::new();
        let members = items
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        Self { members }
    }

    /// Parse an override list such as `"BTC, eth,SOL"`.
    pub fn parse_override(list: &str) -> Self {
        Self::from_identifiers(list.split(','))
    }

    /// Parse universe file contents. Blank lines and `#` lines are ignored.
    pub fn parse_lines(content: &str) -> Self {
        Self::from_identifiers(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Instruments of the given records, in first-appearance order.
    pub fn from_records(records: &[RawRecord]) -> Self {
        Self::from_instruments(records.iter().filter_map(RawRecord::instrument))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentId> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[InstrumentId] {
        &self.members
    }

    pub fn contains(&self, id: &InstrumentId) -> bool {
        self.members.contains(id)
    }
}

/// Where the resolved universe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseSource {
    Override,
    File,
    SourceData,
    Empty,
}

impl UniverseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::File => "file",
            Self::SourceData => "source_data",
            Self::Empty => "empty",
        }
    }
}

/// Resolves the universe for each request.
#[derive(Debug, Clone)]
pub struct UniverseResolver {
    override_list: Option<String>,
    file: Option<PathBuf>,
    fallback_to_source: bool,
}

impl UniverseResolver {
    pub fn new(
        override_list: Option<String>,
        file: Option<PathBuf>,
        fallback_to_source: bool,
    ) -> Self {
        Self {
            override_list,
            file,
            fallback_to_source,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(
            config.universe_override.clone(),
            Some(config.universe_path.clone()),
            config.fallback_to_source,
        )
    }

    /// Resolve the universe. Never fails; the result may be empty.
    pub fn resolve(&self, records: &[RawRecord]) -> Universe {
        self.resolve_with_source(records).0
    }

    /// Resolve the universe and report which step produced it.
    pub fn resolve_with_source(&self, records: &[RawRecord]) -> (Universe, UniverseSource) {
        if let Some(list) = &self.override_list {
            let universe = Universe::parse_override(list);
            if !universe.is_empty() {
                return (universe, UniverseSource::Override);
            }
        }

        if let Some(path) = &self.file {
            match Self::load_file(path) {
                Ok(universe) => return (universe, UniverseSource::File),
                Err(e) => debug!(error = %e, "Universe file skipped"),
            }
        }

        if self.fallback_to_source {
            let universe = Universe::from_records(records);
            if !universe.is_empty() {
                return (universe, UniverseSource::SourceData);
            }
        }

        (Universe::default(), UniverseSource::Empty)
    }

    /// Read and parse a universe file. Missing, unreadable and empty files
    /// are all `UniverseUnavailable`.
    pub fn load_file(path: &Path) -> FeedResult<Universe> {
        let content =
            std::fs::read_to_string(path).map_err(|e| FeedError::UniverseUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let universe = Universe::parse_lines(&content);
        if universe.is_empty() {
            return Err(FeedError::UniverseUnavailable {
                path: path.display().to_string(),
                reason: "no identifiers".to_string(),
            });
        }
        Ok(universe)
    }
}
