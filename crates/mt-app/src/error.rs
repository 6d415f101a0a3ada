//! Error types for the mt-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mt-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<mt_correlations::CorrelationError> for AppError {
    fn from(err: mt_correlations::CorrelationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<mt_core::MtError> for AppError {
    fn from(err: mt_core::MtError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
