//! Check command - verifies the Gemini API key is available.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub fn execute(config: &Config) -> AppResult<()> {
    if !config.has_api_key() {
        return Err(AppError::MissingApiKey);
    }

    tracing::info!("Gemini API key is set");
    Ok(())
}
