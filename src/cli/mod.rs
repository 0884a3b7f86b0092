//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the resolved configuration
//! - `check` - Verify the Gemini API key is available

pub mod args;

pub use args::{Cli, Commands, OutputFormat, ShowArgs};
