use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckguard")]
#[command(about = "Prompt-sanitizing outline backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "DECKGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the outline HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Redact text from an argument or stdin
    Redact {
        /// Text to sanitize (reads stdin when omitted)
        text: Option<String>,

        /// Show per-rule redaction counts
        #[arg(long)]
        report: bool,
    },

    /// List the configured redaction rules in application order
    Rules,

    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
