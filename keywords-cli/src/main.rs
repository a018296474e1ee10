//! `keywords` command-line entry point

use clap::Parser;
use keywords_cli::commands::Commands;

/// RAKE keyword extraction for plain-text files
#[derive(Debug, Parser)]
#[command(name = "keywords", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
