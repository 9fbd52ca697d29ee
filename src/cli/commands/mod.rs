//! CLI subcommands

pub mod decompress;
pub mod extract;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Batch-extract bundle payloads from files or directories
    Extract {
        /// Input files (.compressed payloads, host binaries) or directories
        /// to search recursively
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: `<first input's dir>/<stem>-decompressed`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decompress a single standalone `.compressed` payload
    Decompress {
        /// Compressed payload file
        source: PathBuf,

        /// Destination file (default: source path with the marker stripped)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                inputs,
                output,
                quiet,
                json,
            } => extract::execute(inputs, output.as_deref(), *quiet, *json),
            Commands::Decompress { source, output } => {
                decompress::execute(source, output.as_deref())
            }
        }
    }
}
