//! Application configuration.

use std::path::{Path, PathBuf};

use mfe_core::{PanelClock, BRT_OFFSET_MINUTES};
use mfe_dashboard::DashboardConfig;
use mfe_feed::SourceConfig;
use mfe_risk::ClassifierConfig;
use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Clock configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Panel UTC offset in minutes (BRT = -180).
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
}

fn default_utc_offset() -> i32 {
    BRT_OFFSET_MINUTES
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Load configuration for startup.
    ///
    /// `explicit` is the `--config` / `MFE_CONFIG` path; without it
    /// `config/default.toml` is used. Only a missing default file falls back
    /// to defaults. Environment overrides are applied and the result
    /// validated.
    pub fn load(explicit: Option<String>) -> AppResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                warn!(path = DEFAULT_CONFIG_PATH, "Config file not found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config {path}: {e}")))
    }

    /// Apply environment overrides. Blank values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(port) = get("PORT") {
            self.dashboard.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid PORT {port:?}: {e}")))?;
        }
        if let Some(path) = get("ENTRADA_JSON") {
            self.source.entrada_path = PathBuf::from(path);
        }
        if let Some(path) = get("MFE_UNIVERSE_TXT") {
            self.source.universe_path = PathBuf::from(path);
        }
        if let Some(list) = get("MFE_UNIVERSE") {
            self.source.universe_override = Some(list);
        }
        if let Some(path) = get("TOP10_JSON") {
            self.source.top10_path = PathBuf::from(path);
        }
        if let Some(dir) = get("MFE_STATIC_DIR") {
            self.dashboard.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Reject values the server cannot start with.
    pub fn validate(&self) -> AppResult<()> {
        if self.source.entrada_path.as_os_str().is_empty() {
            return Err(AppError::Config("source.entrada_path is empty".to_string()));
        }
        if self.dashboard.port == 0 {
            return Err(AppError::Config("dashboard.port must be non-zero".to_string()));
        }
        if self.source.read_timeout_ms == 0 {
            return Err(AppError::Config(
                "source.read_timeout_ms must be non-zero".to_string(),
            ));
        }
        PanelClock::new(self.clock.utc_offset_minutes)?;
        self.classifier.validate()?;
        Ok(())
    }
}
