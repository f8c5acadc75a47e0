//! MFE entry panel.
//!
//! Wires configuration, the feed pipeline and the classifier into the panel
//! HTTP server:
//! - Configuration loading (TOML file plus environment overrides)
//! - Dashboard state construction
//! - Server lifecycle

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
