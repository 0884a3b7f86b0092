//! Calc Config - startup configuration for the calculator backend
//!
//! Loads an optional `.env` file into the process environment (never
//! overriding variables that are already set) and exposes the server
//! host, port, environment label and Gemini API key.
//!
//! # Modules
//!
//! - **config**: Configuration loading and constants
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use calc_config::Config;
//!
//! let config = Config::from_env();
//! println!("listening on {}", config.server_addr());
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{get_api_key, Config, DotenvOutcome};
pub use errors::{AppError, AppResult};
