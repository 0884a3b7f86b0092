//! Show command - prints the resolved configuration.

use std::io::Write;

use crate::cli::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::errors::AppResult;

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> AppResult<()> {
    write_to(&mut std::io::stdout().lock(), args.format, config)
}

/// Render the configuration into `out`.
pub fn write_to(out: &mut impl Write, format: OutputFormat, config: &Config) -> AppResult<()> {
    let rendered = render(format, config)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

/// Render the configuration in the requested format.
pub fn render(format: OutputFormat, config: &Config) -> AppResult<String> {
    let summary = config.summary();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => Ok(format!(
            "host:        {}\nport:        {}\nenvironment: {}\napi_key:     {}",
            summary.server_host,
            summary.server_port,
            summary.environment,
            if summary.api_key_set { "set" } else { "not set" }
        )),
    }
}
