//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clock error: {0}")]
    Clock(#[from] mfe_core::CoreError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] mfe_risk::RiskError),

    #[error("Server error: {0}")]
    Server(std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
