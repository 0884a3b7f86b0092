//! Application configuration module
//!
//! Handles the optional `.env` file, environment variables and
//! application-wide constants.

mod constants;
pub mod dotenv;
mod error;
mod settings;

use once_cell::sync::OnceCell;

pub use constants::*;
pub use dotenv::{DotenvOutcome, DotenvReport};
pub use error::ConfigError;
pub use settings::{get_api_key, Config, ConfigSummary};

static GLOBAL: OnceCell<Config> = OnceCell::new();

/// Process-wide configuration, loaded on first access.
///
/// Prefer building a [`Config`] in `main` and passing it down; this exists
/// for code that has no path to the startup value.
pub fn global() -> &'static Config {
    GLOBAL.get_or_init(Config::from_env)
}
