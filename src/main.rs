//! Calc Config - diagnostic entry point
//!
//! CLI-based entry point that dispatches to the configuration commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calc_config::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let (config, outcome) = Config::load();
    tracing::debug!("Configuration loaded ({:?})", outcome);

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &config),
        Commands::Check => commands::check::execute(&config),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
