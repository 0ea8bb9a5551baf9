mod cli;
mod commands;
mod config;
mod error;
mod resolver;
mod vcs;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "asset_stamp=debug"
    } else {
        "asset_stamp=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Stamp { bundle, options } => commands::stamp::run(bundle, options),
        Commands::Warm { options } => commands::warm::run(options),
    }
}
