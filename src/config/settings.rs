//! Application settings loaded once at startup.

use std::env;

use serde::Serialize;

use super::constants::{
    DEFAULT_ENVIRONMENT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, GEMINI_API_KEY_VAR, REDACTED,
};
use super::dotenv::{self, DotenvOutcome};

/// Application configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    server_host: String,
    server_port: u16,
    environment: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("environment", &self.environment)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            api_key: None,
        }
    }
}

/// Serializable view of the configuration with secrets removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub server_host: String,
    pub server_port: u16,
    pub environment: String,
    pub api_key_set: bool,
}

impl Config {
    /// Load `.env` (best-effort) and then read configuration from the environment.
    pub fn from_env() -> Self {
        Self::load().0
    }

    /// Same as [`Config::from_env`], also reporting what happened to `.env`.
    pub fn load() -> (Self, DotenvOutcome) {
        let outcome = dotenv::load();
        (Self::from_process_env(), outcome)
    }

    /// Read configuration from the current process environment only.
    pub fn from_process_env() -> Self {
        let api_key = get_api_key();
        if api_key.is_none() {
            tracing::debug!("{} not set", GEMINI_API_KEY_VAR);
        }

        Self::default().with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Gemini API key, exactly as found in the environment.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// True if an API key is present and non-empty.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            server_host: self.server_host.clone(),
            server_port: self.server_port,
            environment: self.environment.clone(),
            api_key_set: self.has_api_key(),
        }
    }
}

/// Read the Gemini API key from the process environment.
///
/// Returns `None` if the variable is unset or not valid Unicode.
pub fn get_api_key() -> Option<String> {
    env::var(GEMINI_API_KEY_VAR).ok()
}
