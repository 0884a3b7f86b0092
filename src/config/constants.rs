//! Application-wide constants
//!
//! Centralized location for the backend's fixed configuration values.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "localhost";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8900;

/// Deployment mode label ("dev", "prod", ...)
pub const DEFAULT_ENVIRONMENT: &str = "dev";

// =============================================================================
// External APIs
// =============================================================================

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

// =============================================================================
// Environment File
// =============================================================================

/// Name of the environment-definition file searched for on startup
pub const DOTENV_FILENAME: &str = ".env";

/// Set to "1" or "true" to skip loading the environment-definition file
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder printed in place of secret values
pub const REDACTED: &str = "[REDACTED]";
