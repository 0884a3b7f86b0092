//! Error types for configuration loading.
//!
//! Dotenv errors never carry raw `.env` line contents, which may hold secrets.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading an environment-definition file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be opened or read.
    #[error("Failed to read environment file at {path}: {source}")]
    DotenvRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load environment file at {path}")]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    pub(crate) fn from_dotenv(path: impl Into<PathBuf>, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(source) => ConfigError::DotenvRead {
                path: path.into(),
                source,
            },
            _ => ConfigError::DotenvUnknown { path: path.into() },
        }
    }
}
