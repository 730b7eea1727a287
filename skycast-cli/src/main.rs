//! Binary crate for the `skycast` weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The terminal widget and human-friendly output formatting

use clap::Parser;

mod app;
mod cli;
mod logging;
mod tui;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
