mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use deckguard_config::Config;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `redact` output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        cli::Commands::Serve { host, port } => {
            commands::serve::handle(&load_config(config_path)?, host, port).await
        }
        cli::Commands::Redact { text, report } => {
            commands::redact::handle(&load_config(config_path)?, text, report)
        }
        cli::Commands::Rules => commands::rules::handle(&load_config(config_path)?),
        cli::Commands::Init { force } => commands::init::handle(config_path, force),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
