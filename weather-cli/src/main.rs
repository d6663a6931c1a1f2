//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive menu
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod menu;
mod theme;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cli::setup_logging(cmd.verbose);
    cmd.run().await
}
