//! decostura command-line binary

fn main() -> anyhow::Result<()> {
    decostura::cli::run_cli()
}
