//! storylinks - Maintenance tools for Source links in story documents
//!
//! storylinks provides:
//! - GitHub-style heading anchor generation
//! - Validation of `[Source: file#anchor]` references (`check`)
//! - Literal rewrite rules for those references (`fix`)

use anyhow::Result;
use clap::Parser;

mod anchors;
mod cli;
mod core;
mod links;
mod logging;
mod rewrite;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
