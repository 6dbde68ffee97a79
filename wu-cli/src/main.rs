//! Binary crate for the `wu` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments into an immutable feature request
//! - Driving the fetch/decode pipeline from `wu-core`
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    args.run().await
}
