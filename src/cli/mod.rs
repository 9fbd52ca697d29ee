//! decostura CLI - Command-line interface for Costura bundle extraction

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "decostura")]
#[command(version = crate::VERSION)]
#[command(about = "decostura: extract Costura-embedded compressed resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the decostura CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
