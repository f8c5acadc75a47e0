//! Application lifecycle.

use mfe_core::PanelClock;
use mfe_dashboard::{run_server, DashboardState};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Panel application: configuration plus the state shared by all routes.
pub struct Application {
    config: AppConfig,
    state: DashboardState,
}

impl Application {
    /// Build the dashboard state from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let clock = PanelClock::new(config.clock.utc_offset_minutes)?;
        let state = DashboardState::from_config(&config.source, &config.classifier, clock);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Serve until the server fails or Ctrl-C is received.
    pub async fn run(self) -> AppResult<()> {
        let source = &self.config.source;
        info!(
            entrada = %source.entrada_path.display(),
            universe_file = %source.universe_path.display(),
            universe_override = source.universe_override.as_deref().unwrap_or(""),
            top10 = %source.top10_path.display(),
            "Panel data sources"
        );
        if !source.entrada_path.exists() {
            warn!(
                path = %source.entrada_path.display(),
                "Source file not found yet, serving stale snapshots until it appears"
            );
        }

        tokio::select! {
            result = run_server(self.state, self.config.dashboard) => {
                result.map_err(AppError::Server)
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                Ok(())
            }
        }
    }
}
