//! Centralized error handling.
//!
//! Configuration loading itself never fails; these errors belong to the
//! diagnostic commands built on top of it.

use thiserror::Error;

use crate::config::GEMINI_API_KEY_VAR;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{} is not set", GEMINI_API_KEY_VAR)]
    MissingApiKey,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error code for logs and scripts
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingApiKey => "MISSING_API_KEY",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
