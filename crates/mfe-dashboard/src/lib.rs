//! mfe-dashboard - HTTP surface of the MFE entry panel.
//!
//! Serves the panel pages and assets, and the JSON data routes built from
//! the worker's `entrada.json` snapshot. Each data request re-reads the
//! source; nothing is polled in the background.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        mfe-panel process                         │
//! │                                                                  │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────┐   │
//! │  │    Staleness     │  │ UniverseResolver │  │  Classifier   │   │
//! │  │    Controller    │  │                  │  │               │   │
//! │  └────────┬─────────┘  └────────┬─────────┘  └───────┬───────┘   │
//! │           └─────────────────────┼────────────────────┘           │
//! │                                 ▼                                │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │          DashboardState (builds PanelSnapshot)             │  │
//! │  └─────────────────────────────┬──────────────────────────────┘  │
//! │                                │                                 │
//! │  ┌─────────────────────────────┼──────────────────────────────┐  │
//! │  │       axum HTTP Server (port 8082)                         │  │
//! │  │  GET /             → index page                            │  │
//! │  │  GET /health       → liveness                              │  │
//! │  │  GET /api/entrada  → snapshot (alias /api/mfe)             │  │
//! │  │  GET /api/painel   → classified snapshot                   │  │
//! │  │  GET /api/top10    → top10.json pass-through               │  │
//! │  │  GET /top10        → top10 page                            │  │
//! │  │  GET /metrics      → Prometheus text                       │  │
//! │  │  GET /*            → static files                          │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use mfe_dashboard::{run_server, DashboardConfig, DashboardState};
//!
//! let state = DashboardState::from_config(&source, &classifier, PanelClock::brt());
//! run_server(state, DashboardConfig::default()).await?;
//! ```

mod config;
mod server;
mod state;
mod types;

pub use config::DashboardConfig;
pub use server::{create_router, run_server};
pub use state::DashboardState;
pub use types::{HealthResponse, PanelSnapshot, SnapshotVariant};
